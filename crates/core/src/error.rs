#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create export directory: {0}")]
    ExportDirCreation(std::io::Error),
    #[error("failed to write export file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read rules file: {0}")]
    FileRead(std::io::Error),
    #[error("rules schema mismatch at {path}: {message}")]
    RulesSchema { path: String, message: String },
    #[error("invalid keyword: {0}")]
    InvalidKeyword(#[from] careplan_types::TextError),
    #[error("invalid export filename: {0}")]
    InvalidExportFilename(String),
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;
