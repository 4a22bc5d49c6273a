//! Form submission boundary for the care plan generator.
//!
//! This crate plays the part of the profile form: it accepts a completed
//! submission in YAML or JSON, checks it against the form's constraints, and hands a
//! [`careplan_core::HealthProfile`] to the engine.
//!
//! Parse failures report a best-effort field path (via `serde_path_to_error`); constraint
//! failures report a [`ValidationError`].

pub mod submission;
pub mod validation;

pub use submission::ProfileSubmission;
pub use validation::ValidationError;

use careplan_core::HealthProfile;

/// Errors returned by the intake boundary.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with an [`IntakeError`].
pub type IntakeResult<T> = Result<T, IntakeError>;

fn schema_mismatch<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> IntakeError {
    let path = err.path().to_string();
    let source = err.into_inner();
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path.as_str()
    };
    IntakeError::Translation(format!("submission schema mismatch at {path}: {source}"))
}

/// Parse a submission from YAML text without validating it.
pub fn submission_from_yaml(yaml_text: &str) -> IntakeResult<ProfileSubmission> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    serde_path_to_error::deserialize(deserializer).map_err(schema_mismatch)
}

/// Parse a submission from JSON text without validating it.
pub fn submission_from_json(json_text: &str) -> IntakeResult<ProfileSubmission> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);
    serde_path_to_error::deserialize(&mut deserializer).map_err(schema_mismatch)
}

/// Parse and validate a YAML submission.
///
/// # Errors
///
/// Returns [`IntakeError::Translation`] if the text does not match the submission schema
/// (wrong types, unknown keys, missing required fields), or [`IntakeError::Validation`] if
/// a value is outside the form's constraints.
pub fn parse_yaml(yaml_text: &str) -> IntakeResult<HealthProfile> {
    Ok(submission_from_yaml(yaml_text)?.into_profile()?)
}

/// Parse and validate a JSON submission. Errors as for [`parse_yaml`].
pub fn parse_json(json_text: &str) -> IntakeResult<HealthProfile> {
    Ok(submission_from_json(json_text)?.into_profile()?)
}
