mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "support desk host failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, port = config.port, "support desk listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
