mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client init failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "cadastro failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::AppConfig::from_env()?;
    let port = config.port;
    tracing::info!(auth_api_url = %config.auth_api_url, "relaying registrations");

    let state = state::AppState::new(config)?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "cadastro listening");
    axum::serve(listener, app).await?;
    Ok(())
}
