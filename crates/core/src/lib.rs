//! # Care Plan Core
//!
//! Core business logic for the care plan generator.
//!
//! This crate contains the pure recommendation logic and its immediate collaborators:
//! - Health profile domain types
//! - BMI calculation and classification
//! - The keyword policy and rule engine producing a [`TreatmentPlan`]
//! - Plain-text export of a plan
//!
//! **No API concerns**: parsing submissions, HTTP servers and terminal rendering belong in
//! `careplan-intake`, `api-rest` and `careplan-cli`.

pub mod bmi;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod export;
pub mod keywords;
pub mod plan;
pub mod profile;
pub mod validation;

pub use bmi::{BmiCategory, BmiIndicator, BmiResult};
pub use config::CoreConfig;
pub use engine::{generate_plan, RecommendationEngine};
pub use error::{PlanError, PlanResult};
pub use export::{export_filename, render_export, write_export, ExportMode};
pub use keywords::{KeywordSet, RuleSet};
pub use plan::{Recommendation, Rule, Section, TreatmentPlan};
pub use profile::{
    ExerciseFrequency, Gender, HealthProfile, JunkFoodIntake, MedicalHistory, MenstrualCycle,
};

pub use careplan_types::ReportedText;
