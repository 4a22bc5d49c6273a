//! Treatment plan output types.
//!
//! A [`TreatmentPlan`] is built once by the engine and then only read. Entry order is the
//! rule evaluation order; presenters and exporters rely on it.

use crate::bmi::BmiResult;
use serde::Serialize;

/// Plan section a recommendation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Weight,
    Sleep,
    Exercise,
    Stress,
    Preventive,
    Diet,
}

impl Section {
    /// Stable snake_case key, identical to the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Weight => "weight",
            Section::Sleep => "sleep",
            Section::Exercise => "exercise",
            Section::Stress => "stress",
            Section::Preventive => "preventive",
            Section::Diet => "diet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Weight => "Weight",
            Section::Sleep => "Sleep",
            Section::Exercise => "Exercise",
            Section::Stress => "Stress",
            Section::Preventive => "Preventive",
            Section::Diet => "Diet",
        }
    }
}

/// Stable identifier of the rule that produced an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    WeightGain,
    WeightLoss,
    WeightConsult,
    SleepUnder,
    SleepOver,
    SleepInRange,
    ExerciseStart,
    ExerciseConsistency,
    ExerciseMaintain,
    StressManagement,
    AgeCheckup,
    DiabetesCare,
    HypertensionCare,
    CardiovascularScreening,
    MentalHealthSupport,
    JunkFoodReduce,
    JunkFoodModerate,
    JunkFoodMaintain,
    BalancedDiet,
}

impl Rule {
    /// Stable snake_case key, identical to the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::WeightGain => "weight_gain",
            Rule::WeightLoss => "weight_loss",
            Rule::WeightConsult => "weight_consult",
            Rule::SleepUnder => "sleep_under",
            Rule::SleepOver => "sleep_over",
            Rule::SleepInRange => "sleep_in_range",
            Rule::ExerciseStart => "exercise_start",
            Rule::ExerciseConsistency => "exercise_consistency",
            Rule::ExerciseMaintain => "exercise_maintain",
            Rule::StressManagement => "stress_management",
            Rule::AgeCheckup => "age_checkup",
            Rule::DiabetesCare => "diabetes_care",
            Rule::HypertensionCare => "hypertension_care",
            Rule::CardiovascularScreening => "cardiovascular_screening",
            Rule::MentalHealthSupport => "mental_health_support",
            Rule::JunkFoodReduce => "junk_food_reduce",
            Rule::JunkFoodModerate => "junk_food_moderate",
            Rule::JunkFoodMaintain => "junk_food_maintain",
            Rule::BalancedDiet => "balanced_diet",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Rule::WeightGain | Rule::WeightLoss | Rule::WeightConsult => Section::Weight,
            Rule::SleepUnder | Rule::SleepOver | Rule::SleepInRange => Section::Sleep,
            Rule::ExerciseStart | Rule::ExerciseConsistency | Rule::ExerciseMaintain => {
                Section::Exercise
            }
            Rule::StressManagement => Section::Stress,
            Rule::AgeCheckup
            | Rule::DiabetesCare
            | Rule::HypertensionCare
            | Rule::CardiovascularScreening
            | Rule::MentalHealthSupport => Section::Preventive,
            Rule::JunkFoodReduce
            | Rule::JunkFoodModerate
            | Rule::JunkFoodMaintain
            | Rule::BalancedDiet => Section::Diet,
        }
    }
}

/// A single labelled message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub section: Section,
    pub rule: Rule,
    pub text: String,
}

/// Ordered recommendations plus the BMI result, if one could be computed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreatmentPlan {
    bmi: Option<BmiResult>,
    recommendations: Vec<Recommendation>,
}

impl TreatmentPlan {
    pub(crate) fn new(bmi: Option<BmiResult>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            bmi,
            recommendations,
        }
    }

    pub fn bmi(&self) -> Option<&BmiResult> {
        self.bmi.as_ref()
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Entries of one section, in plan order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.section == section)
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.recommendations.iter().any(|r| r.rule == rule)
    }
}
