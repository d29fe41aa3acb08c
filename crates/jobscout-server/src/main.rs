use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use jobscout_client::default_scraper;
use jobscout_core::aggregate::{Aggregator, AggregatorConfig};
use jobscout_server::routes;
use jobscout_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jobscout=info".parse()?))
        .with_target(false)
        .init();

    let port = std::env::var("JOBSCOUT_SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let deadline = std::env::var("JOBSCOUT_SOURCE_DEADLINE_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs);

    let mut config = AggregatorConfig::default();
    if let Some(deadline) = deadline {
        config = config.with_source_deadline(deadline);
    }

    let aggregator = Aggregator::new(default_scraper()?).with_config(config);
    let state = Arc::new(AppState { aggregator });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
