use eyre::Result;

use phq_server::config::ServerConfig;
use phq_server::state::AppState;
use phq_server::{router, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;
    telemetry::init(config.log_format);

    let addr = config.bind_addr;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "phq-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("phq-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
    }
}
