//! Wire model for a completed health form.
//!
//! Responsibilities:
//! - Define the strict serialisation shape of a submission (YAML, JSON, HTTP bodies)
//! - Translate a submission into the domain [`HealthProfile`]
//! - Apply the form's range and option constraints on the way in
//!
//! Choice fields carry the form labels verbatim (`"Non-binary"`, `"Not applicable"`).

use crate::validation::{
    measure_in_range, option, whole_in_range, ValidationError, AGE_RANGE, HEIGHT_CM_RANGE,
    SLEEP_HOURS_RANGE, WEIGHT_KG_RANGE,
};
use careplan_core::{
    ExerciseFrequency, Gender, HealthProfile, JunkFoodIntake, MedicalHistory, MenstrualCycle,
    ReportedText,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One completed form, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub full_name: String,
    /// Years, 1 to 120.
    #[schema(example = 30)]
    pub age: i64,
    #[schema(example = "Female")]
    pub gender: String,
    #[serde(default)]
    pub occupation: String,
    /// Centimetres, 50 to 250.
    #[schema(example = 170.0)]
    pub height_cm: f64,
    /// Kilograms, 1 to 500.
    #[schema(example = 70.0)]
    pub weight_kg: f64,

    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub medical_conditions: String,
    #[serde(default)]
    pub surgeries: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub family_history: String,
    #[serde(default)]
    pub recent_illnesses: String,
    #[serde(default)]
    pub mental_health: String,

    /// Whole hours per night, 1 to 12.
    #[schema(example = 7)]
    pub sleep_hours: i64,
    #[schema(example = "Regularly")]
    pub exercise_frequency: String,
    #[schema(example = "Low")]
    pub junk_food: String,
    /// Only read when gender is `Female`.
    #[serde(default)]
    #[schema(example = "Regular")]
    pub menstrual_cycle: Option<String>,
}

impl ProfileSubmission {
    /// Validate the submission and build a [`HealthProfile`].
    ///
    /// Empty free-text answers become "not reported". The menstrual cycle answer is
    /// replaced by `Not applicable` unless gender is `Female`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn into_profile(self) -> Result<HealthProfile, ValidationError> {
        let age = whole_in_range("age", self.age, AGE_RANGE)?;
        let gender = option("gender", &self.gender, &Gender::ALL, Gender::label)?;
        let height_cm = measure_in_range("height_cm", self.height_cm, HEIGHT_CM_RANGE)?;
        let weight_kg = measure_in_range("weight_kg", self.weight_kg, WEIGHT_KG_RANGE)?;
        let sleep_hours = whole_in_range("sleep_hours", self.sleep_hours, SLEEP_HOURS_RANGE)?;
        let exercise_frequency = option(
            "exercise_frequency",
            &self.exercise_frequency,
            &ExerciseFrequency::ALL,
            ExerciseFrequency::label,
        )?;
        let junk_food = option(
            "junk_food",
            &self.junk_food,
            &JunkFoodIntake::ALL,
            JunkFoodIntake::label,
        )?;

        let menstrual_cycle = match (gender, self.menstrual_cycle.as_deref()) {
            (Gender::Female, Some(value)) => option(
                "menstrual_cycle",
                value,
                &MenstrualCycle::ALL,
                MenstrualCycle::label,
            )?,
            (Gender::Female, None) => MenstrualCycle::NotApplicable,
            (_, value) => {
                if value.is_some_and(|v| v != MenstrualCycle::NotApplicable.label()) {
                    tracing::debug!(
                        gender = gender.label(),
                        "menstrual_cycle ignored for non-female submission"
                    );
                }
                MenstrualCycle::NotApplicable
            }
        };

        Ok(HealthProfile {
            full_name: self.full_name,
            age,
            gender,
            occupation: self.occupation,
            height_cm,
            weight_kg,
            history: MedicalHistory {
                allergies: ReportedText::from_input(self.allergies),
                medical_conditions: ReportedText::from_input(self.medical_conditions),
                surgeries: ReportedText::from_input(self.surgeries),
                medications: ReportedText::from_input(self.medications),
                family_history: ReportedText::from_input(self.family_history),
                recent_illnesses: ReportedText::from_input(self.recent_illnesses),
                mental_health: ReportedText::from_input(self.mental_health),
            },
            sleep_hours,
            exercise_frequency,
            junk_food,
            menstrual_cycle,
        })
    }
}
