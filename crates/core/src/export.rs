//! Plain-text plan export.
//!
//! The default document is a header only: the subject's name and the generation date.
//! Recommendation bodies are left out unless [`ExportMode::Full`] is requested.

use crate::constants::{
    EXPORT_FILENAME_EXTENSION, EXPORT_FILENAME_MAX_LEN, EXPORT_FILENAME_PREFIX,
};
use crate::plan::TreatmentPlan;
use crate::validation::validate_export_filename;
use crate::{PlanError, PlanResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// What the exported document contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Name and date only.
    #[default]
    HeaderOnly,
    /// Header followed by the BMI line and every recommendation.
    Full,
}

/// Filename offered for download: `treatment_plan_<name>.txt`.
///
/// Spaces, path separators and NUL bytes in the name become `_`, and `..` collapses to `_`,
/// so any name yields a plain file name. Over-long names are cut at a character boundary.
pub fn export_filename(full_name: &str) -> String {
    let mut stem: String = full_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    while stem.contains("..") {
        stem = stem.replace("..", "_");
    }

    let max_stem = EXPORT_FILENAME_MAX_LEN
        - EXPORT_FILENAME_PREFIX.len()
        - EXPORT_FILENAME_EXTENSION.len()
        - 1;
    if stem.len() > max_stem {
        let mut end = max_stem;
        while !stem.is_char_boundary(end) {
            end -= 1;
        }
        stem.truncate(end);
    }
    // A trailing dot would meet the extension's dot.
    if stem.ends_with('.') {
        stem.pop();
        stem.push('_');
    }

    format!("{EXPORT_FILENAME_PREFIX}{stem}.{EXPORT_FILENAME_EXTENSION}")
}

/// Render the export document.
pub fn render_export(
    full_name: &str,
    generated_on: NaiveDate,
    plan: &TreatmentPlan,
    mode: ExportMode,
) -> String {
    let mut doc = format!(
        "Personalized Treatment Plan for {full_name}\nGenerated on: {}\n\n",
        generated_on.format("%Y-%m-%d")
    );

    if mode == ExportMode::Full {
        if let Some(bmi) = plan.bmi() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                doc,
                "BMI: {} ({})",
                bmi.display_value(),
                bmi.category.label()
            );
        }
        for rec in plan.recommendations() {
            let _ = writeln!(doc, "[{}] {}", rec.section.label(), rec.text);
        }
    }

    doc
}

/// Write the export document into `export_dir`, creating the directory if needed.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns [`PlanError`] if:
/// - the derived filename fails [`validate_export_filename`],
/// - the directory cannot be created,
/// - the file cannot be written.
pub fn write_export(
    export_dir: &Path,
    full_name: &str,
    generated_on: NaiveDate,
    plan: &TreatmentPlan,
    mode: ExportMode,
) -> PlanResult<PathBuf> {
    let filename = export_filename(full_name);
    validate_export_filename(&filename)?;

    std::fs::create_dir_all(export_dir).map_err(PlanError::ExportDirCreation)?;
    let path = export_dir.join(&filename);
    let doc = render_export(full_name, generated_on, plan, mode);
    std::fs::write(&path, doc).map_err(PlanError::FileWrite)?;

    tracing::info!(path = %path.display(), ?mode, "wrote plan export");
    Ok(path)
}
