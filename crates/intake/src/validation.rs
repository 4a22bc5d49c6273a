//! Range and option checks for form submissions.
//!
//! These mirror the limits of the profile form. They run at the
//! intake boundary so the engine never sees an out-of-range profile.

/// Rejected field value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be one of {allowed}, got '{value}'")]
    UnknownOption {
        field: &'static str,
        allowed: String,
        value: String,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::UnknownOption { field, .. } => *field,
        }
    }
}

pub const AGE_RANGE: (i64, i64) = (1, 120);
pub const HEIGHT_CM_RANGE: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (1.0, 500.0);
pub const SLEEP_HOURS_RANGE: (i64, i64) = (1, 12);

/// Check an integer field against an inclusive range and narrow it to `u8`.
pub fn whole_in_range(
    field: &'static str,
    value: i64,
    (min, max): (i64, i64),
) -> Result<u8, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    u8::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        min: min as f64,
        max: max as f64,
        value: value as f64,
    })
}

/// Check a measurement against an inclusive range.
pub fn measure_in_range(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(value)
}

/// Map a form label to an option, listing the accepted labels on failure.
pub fn option<T: Copy>(
    field: &'static str,
    value: &str,
    options: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, ValidationError> {
    options
        .iter()
        .copied()
        .find(|o| label(*o) == value)
        .ok_or_else(|| ValidationError::UnknownOption {
            field,
            allowed: options
                .iter()
                .map(|o| format!("'{}'", label(*o)))
                .collect::<Vec<_>>()
                .join(", "),
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use careplan_core::ExerciseFrequency;

    #[test]
    fn whole_in_range_accepts_bounds() {
        assert_eq!(whole_in_range("age", 1, AGE_RANGE), Ok(1));
        assert_eq!(whole_in_range("age", 120, AGE_RANGE), Ok(120));
    }

    #[test]
    fn whole_in_range_rejects_outside() {
        let err = whole_in_range("age", 0, AGE_RANGE).expect_err("too young");
        assert_eq!(err.field(), "age");
        assert_eq!(err.to_string(), "age must be between 1 and 120, got 0");

        assert!(whole_in_range("sleep_hours", 13, SLEEP_HOURS_RANGE).is_err());
    }

    #[test]
    fn measure_in_range_rejects_non_finite() {
        let err = measure_in_range("height_cm", f64::NAN, HEIGHT_CM_RANGE).expect_err("nan");
        assert!(matches!(err, ValidationError::NotFinite { field: "height_cm" }));
        assert!(measure_in_range("weight_kg", f64::INFINITY, WEIGHT_KG_RANGE).is_err());
    }

    #[test]
    fn measure_in_range_bounds() {
        assert_eq!(measure_in_range("height_cm", 50.0, HEIGHT_CM_RANGE), Ok(50.0));
        assert!(measure_in_range("height_cm", 49.9, HEIGHT_CM_RANGE).is_err());
        assert!(measure_in_range("weight_kg", 500.1, WEIGHT_KG_RANGE).is_err());
    }

    #[test]
    fn option_lists_allowed_labels() {
        let all = ExerciseFrequency::ALL;
        assert_eq!(
            option("exercise_frequency", "Never", &all, ExerciseFrequency::label),
            Ok(ExerciseFrequency::Never)
        );
        let err = option("exercise_frequency", "Daily", &all, ExerciseFrequency::label)
            .expect_err("unknown option");
        assert_eq!(
            err.to_string(),
            "exercise_frequency must be one of 'Regularly', 'Occasionally', 'Never', got 'Daily'"
        );
    }
}
