//! Dashboard Proxy: backend for the admin dashboard.
//! Used by: binary entrypoint.

pub mod charts;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod upstream;

#[cfg(test)]
mod testing;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let state = state::build_state(&config)?;
    tracing::info!(
        upstream = %state.upstream.url(),
        charts = state.charts.len(),
        "starting dashboard-proxy on {}",
        config.bind_addr
    );

    console::print_banner();
    console::print_startup(&config, state.charts.len());

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
