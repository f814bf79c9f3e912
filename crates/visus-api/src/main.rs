use tracing_subscriber::EnvFilter;
use visus_api::config::ServiceConfig;
use visus_api::state::AppState;
use visus_risk::RiskEvaluator;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    let thresholds = config.load_thresholds()?;
    let state = AppState::new(RiskEvaluator::new(thresholds));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "visus api listening");

    axum::serve(listener, visus_api::router(state))
        .await
        .map_err(|e| eyre::eyre!("server error: {e}"))
}
