use std::sync::Arc;

use anyhow::Result;
use contact_list_http::{AppState, Settings, create_router};

use super::open_service;

pub(crate) async fn run(database_url: &str, port: u16, host: &str) -> Result<()> {
    let contact_service = Arc::new(open_service(database_url).await?);
    let settings = Settings::from_env();
    let state = Arc::new(AppState::new(contact_service, &settings)?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(%addr, developer = %settings.developer_name, "starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown signal received");
}
