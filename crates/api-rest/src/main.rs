//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful during development when you only want the REST server (with OpenAPI/Swagger UI).
//! The workspace's `careplan-run` binary does the same after loading a `.env` file.

use api_rest::{router, AppState};
use careplan_core::{config::rules_from_env_value, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the care plan REST API server
///
/// # Environment Variables
/// - `CAREPLAN_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `CAREPLAN_RULES_FILE`: Optional keyword policy YAML
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the rules file cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CAREPLAN_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let rules = rules_from_env_value(std::env::var("CAREPLAN_RULES_FILE").ok())?;
    let cfg = CoreConfig::with_rules(rules);

    tracing::info!("-- Starting care plan REST API on {}", addr);

    let app = router(AppState::new(&cfg));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
