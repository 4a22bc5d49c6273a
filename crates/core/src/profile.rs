//! Self-reported health profile.
//!
//! A [`HealthProfile`] is the already-validated input to the recommendation engine. Range
//! checks happen at the intake boundary (`careplan-intake`); types here carry no checks of
//! their own beyond what the enums express.

use careplan_types::ReportedText;

/// Gender as offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    /// Every option, in form order.
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    /// Form label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// How often the person exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseFrequency {
    Regularly,
    Occasionally,
    Never,
}

impl ExerciseFrequency {
    /// Every option, in form order.
    pub const ALL: [ExerciseFrequency; 3] = [
        ExerciseFrequency::Regularly,
        ExerciseFrequency::Occasionally,
        ExerciseFrequency::Never,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExerciseFrequency::Regularly => "Regularly",
            ExerciseFrequency::Occasionally => "Occasionally",
            ExerciseFrequency::Never => "Never",
        }
    }
}

/// Self-assessed junk food consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JunkFoodIntake {
    High,
    Moderate,
    Low,
}

impl JunkFoodIntake {
    /// Every option, in form order.
    pub const ALL: [JunkFoodIntake; 3] = [
        JunkFoodIntake::High,
        JunkFoodIntake::Moderate,
        JunkFoodIntake::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JunkFoodIntake::High => "High",
            JunkFoodIntake::Moderate => "Moderate",
            JunkFoodIntake::Low => "Low",
        }
    }
}

/// Menstrual cycle description.
///
/// Collected for input compatibility. No rule reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenstrualCycle {
    Regular,
    Irregular,
    #[default]
    NotApplicable,
}

impl MenstrualCycle {
    /// Every option, in form order.
    pub const ALL: [MenstrualCycle; 3] = [
        MenstrualCycle::Regular,
        MenstrualCycle::Irregular,
        MenstrualCycle::NotApplicable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenstrualCycle::Regular => "Regular",
            MenstrualCycle::Irregular => "Irregular",
            MenstrualCycle::NotApplicable => "Not applicable",
        }
    }
}

/// Free-text medical history answers. `None` means "not reported".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicalHistory {
    pub allergies: Option<ReportedText>,
    pub medical_conditions: Option<ReportedText>,
    pub surgeries: Option<ReportedText>,
    pub medications: Option<ReportedText>,
    pub family_history: Option<ReportedText>,
    pub recent_illnesses: Option<ReportedText>,
    pub mental_health: Option<ReportedText>,
}

/// One submission's worth of self-reported health data.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthProfile {
    pub full_name: String,
    /// Age in years, 1 to 120.
    pub age: u8,
    pub gender: Gender,
    pub occupation: String,
    /// Height in centimetres, 50 to 250.
    pub height_cm: f64,
    /// Weight in kilograms, 1 to 500.
    pub weight_kg: f64,
    pub history: MedicalHistory,
    /// Average nightly sleep in whole hours, 1 to 12.
    pub sleep_hours: u8,
    pub exercise_frequency: ExerciseFrequency,
    pub junk_food: JunkFoodIntake,
    pub menstrual_cycle: MenstrualCycle,
}
