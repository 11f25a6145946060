use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecoswap_web::config::AppConfig;
use ecoswap_web::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ecoswap_web=debug,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.server_addr();
    info!(
        "Starting EcoSwap pricing service on {} (currency {})",
        addr, config.currency
    );

    let state = AppState::with_fixtures(config);
    info!(
        "Catalog loaded: {} warehouses, {} stations, {} service centers",
        state.catalog.warehouses().len(),
        state.catalog.stations().len(),
        state.catalog.service_centers().len()
    );

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
