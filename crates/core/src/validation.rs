//! Input validation utilities.
//!
//! Checks applied to values derived from user input before they touch the file system.

use crate::constants::EXPORT_FILENAME_MAX_LEN;
use crate::{PlanError, PlanResult};

/// Validates that an export filename is safe to join onto the export directory.
///
/// [`crate::export::export_filename`] already maps unsafe characters away, so this is the
/// last check before the name is joined onto a directory. It rejects:
/// - empty names
/// - names longer than common file system limits
/// - path separators, parent references and NUL bytes
///
/// # Errors
///
/// Returns `PlanError::InvalidExportFilename` describing the problem.
pub fn validate_export_filename(filename: &str) -> PlanResult<()> {
    if filename.trim().is_empty() {
        return Err(PlanError::InvalidExportFilename(
            "filename cannot be empty".into(),
        ));
    }

    if filename.len() > EXPORT_FILENAME_MAX_LEN {
        return Err(PlanError::InvalidExportFilename(format!(
            "filename exceeds maximum length of {} bytes",
            EXPORT_FILENAME_MAX_LEN
        )));
    }

    if filename.contains(['/', '\\', '\0']) {
        return Err(PlanError::InvalidExportFilename(
            "filename contains path separators or NUL bytes".into(),
        ));
    }

    if filename.contains("..") {
        return Err(PlanError::InvalidExportFilename(
            "filename contains a parent directory reference".into(),
        ));
    }

    Ok(())
}
