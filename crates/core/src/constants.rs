//! Constants used throughout the care plan core crate.
//!
//! Thresholds, default keyword lists and export naming live here so the rules read as
//! comparisons against named values.

/// BMI below this value is underweight.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI at or above this value is overweight.
pub const BMI_OVERWEIGHT_FROM: f64 = 25.0;

/// BMI at or above this value is obese.
pub const BMI_OBESE_FROM: f64 = 30.0;

/// Fewer nightly hours than this is under-sleeping.
pub const SLEEP_MIN_HOURS: u8 = 6;

/// More nightly hours than this is over-sleeping.
pub const SLEEP_MAX_HOURS: u8 = 9;

/// Ages strictly above this receive the routine check-up message.
pub const CHECKUP_AGE_ABOVE: u8 = 40;

/// Default keywords flagging diabetes in reported medical conditions.
pub const DIABETES_KEYWORDS: &[&str] = &["diabetes", "diabetic"];

/// Default keywords flagging hypertension in reported medical conditions.
pub const HYPERTENSION_KEYWORDS: &[&str] = &["hypertension", "high blood pressure"];

/// Default keywords flagging heart conditions in family history.
pub const CARDIAC_KEYWORDS: &[&str] = &["heart", "cardiac"];

/// Default directory for exported plan documents.
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Prefix of exported plan filenames.
pub const EXPORT_FILENAME_PREFIX: &str = "treatment_plan_";

/// Extension of exported plan filenames.
pub const EXPORT_FILENAME_EXTENSION: &str = "txt";

/// Longest export filename in bytes.
pub const EXPORT_FILENAME_MAX_LEN: usize = 255;
