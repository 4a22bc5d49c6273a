use api_rest::{AppState, router};
use api_shared::HealthService;
use careplan_core::{CoreConfig, config::rules_from_env_value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the care plan application
///
/// Loads `.env` (if present), resolves configuration once and serves the REST API until
/// Ctrl-C is received.
///
/// # Environment Variables
/// - `CAREPLAN_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CAREPLAN_RULES_FILE`: Optional keyword policy YAML
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careplan_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CAREPLAN_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let rules = rules_from_env_value(std::env::var("CAREPLAN_RULES_FILE").ok())?;
    let cfg = CoreConfig::with_rules(rules);

    let health = HealthService::check_health();
    tracing::info!("++ {}", health.message);
    tracing::info!(
        checkup_age_above = cfg.rules().checkup_age_above,
        "++ Starting care plan REST on {}",
        rest_addr
    );

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(AppState::new(&cfg)))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("-- Shutting down");
        })
        .await?;

    Ok(())
}
