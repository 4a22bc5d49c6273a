//! Body Mass Index calculation and classification.

use crate::constants::{BMI_OBESE_FROM, BMI_OVERWEIGHT_FROM, BMI_UNDERWEIGHT_BELOW};
use serde::Serialize;

/// WHO adult BMI band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// How a category should be highlighted when displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiIndicator {
    Normal,
    Warning,
    Danger,
}

impl BmiIndicator {
    pub fn as_str(self) -> &'static str {
        match self {
            BmiIndicator::Normal => "normal",
            BmiIndicator::Warning => "warning",
            BmiIndicator::Danger => "danger",
        }
    }
}

impl BmiCategory {
    /// Classify a BMI value. Lower bounds are inclusive: 18.5 is normal, 25 overweight,
    /// 30 obese.
    pub fn from_value(value: f64) -> Self {
        if value < BMI_UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if value < BMI_OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if value < BMI_OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human-readable category name.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn indicator(self) -> BmiIndicator {
        match self {
            BmiCategory::Normal => BmiIndicator::Normal,
            BmiCategory::Underweight | BmiCategory::Overweight => BmiIndicator::Warning,
            BmiCategory::Obese => BmiIndicator::Danger,
        }
    }
}

/// A computed BMI value and its category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Compute BMI from height in centimetres and weight in kilograms.
    ///
    /// Returns `None` unless both measurements are strictly positive.
    pub fn from_measurements(height_cm: f64, weight_kg: f64) -> Option<Self> {
        if !(height_cm > 0.0 && weight_kg > 0.0) {
            return None;
        }
        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        Some(Self {
            value,
            category: BmiCategory::from_value(value),
        })
    }

    /// Value rounded to one decimal place, as shown to users.
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries_are_inclusive_at_lower_edge() {
        assert_eq!(BmiCategory::from_value(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obese);
    }

    #[test]
    fn exact_boundaries_from_measurements() {
        // 100 cm makes the value equal to the weight.
        let at = |w: f64| BmiResult::from_measurements(100.0, w).expect("bmi").category;
        assert_eq!(at(18.5), BmiCategory::Normal);
        assert_eq!(at(25.0), BmiCategory::Overweight);
        assert_eq!(at(30.0), BmiCategory::Obese);
    }

    #[test]
    fn computes_value_for_typical_adult() {
        let bmi = BmiResult::from_measurements(170.0, 70.0).expect("bmi");
        assert!((bmi.value - 24.221_453).abs() < 1e-5);
        assert_eq!(bmi.display_value(), "24.2");
        assert_eq!(bmi.category.label(), "Normal weight");
    }

    #[test]
    fn omitted_for_non_positive_measurements() {
        assert!(BmiResult::from_measurements(0.0, 70.0).is_none());
        assert!(BmiResult::from_measurements(170.0, 0.0).is_none());
        assert!(BmiResult::from_measurements(-1.0, 70.0).is_none());
        assert!(BmiResult::from_measurements(f64::NAN, 70.0).is_none());
    }

    #[test]
    fn indicators_follow_severity() {
        assert_eq!(BmiCategory::Normal.indicator(), BmiIndicator::Normal);
        assert_eq!(BmiCategory::Underweight.indicator(), BmiIndicator::Warning);
        assert_eq!(BmiCategory::Overweight.indicator(), BmiIndicator::Warning);
        assert_eq!(BmiCategory::Obese.indicator(), BmiIndicator::Danger);
    }
}
