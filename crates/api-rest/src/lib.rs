//! # API REST
//!
//! REST API implementation for the care plan generator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, download headers)
//!
//! Uses `api-shared` for request/response types and `careplan-intake` to validate
//! submissions before they reach the engine.

#![warn(rust_2018_idioms)]

use api_shared::{BmiReq, BmiRes, ErrorRes, ExportQuery, HealthRes, HealthService, PlanRes};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use careplan_core::{export_filename, render_export, BmiResult, CoreConfig, RecommendationEngine};
use careplan_intake::{IntakeError, ProfileSubmission};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across request handlers.
///
/// Holds only immutable data; handlers never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RecommendationEngine>,
}

impl AppState {
    pub fn new(cfg: &CoreConfig) -> Self {
        Self {
            engine: Arc::new(cfg.engine()),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_plan, export_plan, calculate_bmi),
    components(schemas(
        HealthRes,
        ErrorRes,
        BmiReq,
        BmiRes,
        PlanRes,
        api_shared::RecommendationRes,
        ProfileSubmission,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plans", post(create_plan))
        .route("/plans/export", post(export_plan))
        .route("/bmi", post(calculate_bmi))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorRes>);

fn intake_error(err: IntakeError) -> ApiError {
    let status = match &err {
        IntakeError::Translation(_) => StatusCode::BAD_REQUEST,
        IntakeError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::warn!("rejected submission: {}", err);
    (status, Json(ErrorRes::new(err)))
}

/// `Content-Disposition` value with an ASCII `filename` fallback, where anything outside
/// printable ASCII plus quotes and backslashes become `_`, and an RFC 5987 `filename*`
/// carrying the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{safe}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/plans",
    request_body = ProfileSubmission,
    responses(
        (status = 200, description = "Generated treatment plan", body = PlanRes),
        (status = 400, description = "Body does not match the submission schema", body = ErrorRes),
        (status = 422, description = "A field is outside the form's constraints", body = ErrorRes)
    )
)]
/// Generate a treatment plan from a form submission
///
/// The body is parsed strictly: unknown keys and wrong types are rejected with the path of
/// the offending field. Values outside the form's ranges are rejected before the engine runs.
///
/// # Errors
/// Returns `400 Bad Request` for schema mismatches and `422 Unprocessable Entity` for
/// validation failures.
#[axum::debug_handler]
async fn create_plan(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PlanRes>, ApiError> {
    let profile = careplan_intake::parse_json(&body).map_err(intake_error)?;
    let plan = state.engine.generate_plan(&profile);
    tracing::debug!(entries = plan.recommendations().len(), "generated plan");
    Ok(Json(PlanRes::from(&plan)))
}

#[utoipa::path(
    post,
    path = "/plans/export",
    request_body = ProfileSubmission,
    params(ExportQuery),
    responses(
        (status = 200, description = "Plain-text plan document", body = String, content_type = "text/plain"),
        (status = 400, description = "Body does not match the submission schema", body = ErrorRes),
        (status = 422, description = "A field is outside the form's constraints", body = ErrorRes)
    )
)]
/// Download the plan as a plain-text document
///
/// By default the document holds only the name and generation date. Pass `mode=full` to
/// append the BMI line and every recommendation.
#[axum::debug_handler]
async fn export_plan(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    body: String,
) -> Result<Response, ApiError> {
    let profile = careplan_intake::parse_json(&body).map_err(intake_error)?;
    let plan = state.engine.generate_plan(&profile);
    let today = chrono::Local::now().date_naive();
    let doc = render_export(&profile.full_name, today, &plan, query.mode);
    let filename = export_filename(&profile.full_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        doc,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/bmi",
    request_body = BmiReq,
    responses(
        (status = 200, description = "BMI result, or null when height or weight is not positive", body = Option<BmiRes>)
    )
)]
/// Calculate BMI and its category
#[axum::debug_handler]
async fn calculate_bmi(
    State(_state): State<AppState>,
    Json(req): Json<BmiReq>,
) -> Json<Option<BmiRes>> {
    Json(BmiResult::from_measurements(req.height_cm, req.weight_kg).map(|b| BmiRes::from(&b)))
}
