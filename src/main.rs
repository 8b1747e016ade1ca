mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,foodshare=debug")))
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::Config::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let port = config.port;
    tracing::info!(api_url = %config.api_url, timeout_secs = config.api_timeout.as_secs(), "backend passthrough configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "foodshare listening");
    axum::serve(listener, app).await?;
    Ok(())
}
