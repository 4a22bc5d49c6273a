//! Request and response bodies for the REST API.
//!
//! These are flat, string-keyed views of the core types so the OpenAPI document stays
//! independent of the core crate's internals.

use careplan_core::{BmiResult, ExportMode, Recommendation, TreatmentPlan};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of an error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BmiReq {
    #[schema(example = 170.0)]
    pub height_cm: f64,
    #[schema(example = 70.0)]
    pub weight_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BmiRes {
    pub value: f64,
    /// Value rounded to one decimal place.
    #[schema(example = "24.2")]
    pub display_value: String,
    #[schema(example = "Normal weight")]
    pub category: String,
    /// One of `normal`, `warning`, `danger`.
    #[schema(example = "normal")]
    pub indicator: String,
}

impl From<&BmiResult> for BmiRes {
    fn from(bmi: &BmiResult) -> Self {
        Self {
            value: bmi.value,
            display_value: bmi.display_value(),
            category: bmi.category.label().to_string(),
            indicator: bmi.category.indicator().as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRes {
    #[schema(example = "sleep")]
    pub section: String,
    #[schema(example = "sleep_in_range")]
    pub rule: String,
    pub text: String,
}

impl From<&Recommendation> for RecommendationRes {
    fn from(rec: &Recommendation) -> Self {
        Self {
            section: rec.section.as_str().to_string(),
            rule: rec.rule.as_str().to_string(),
            text: rec.text.clone(),
        }
    }
}

/// A generated plan. `recommendations` is in evaluation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanRes {
    pub bmi: Option<BmiRes>,
    pub recommendations: Vec<RecommendationRes>,
}

impl From<&TreatmentPlan> for PlanRes {
    fn from(plan: &TreatmentPlan) -> Self {
        Self {
            bmi: plan.bmi().map(BmiRes::from),
            recommendations: plan
                .recommendations()
                .iter()
                .map(RecommendationRes::from)
                .collect(),
        }
    }
}

/// Query parameters of the export endpoint.
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// `header_only` (default) or `full`.
    #[param(value_type = Option<String>)]
    #[serde(default)]
    pub mode: ExportMode,
}
