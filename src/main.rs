use anyhow::Context;
use clap::Parser;
use hospital_api::api::build_router;
use hospital_api::config::Config;
use hospital_api::pipeline::{AccessLog, AuthGate, Pipeline};
use hospital_api::storage::Store;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    // 1. Storage, hydrated from the snapshot files:
    let store = Store::open(&config.data_dir).with_context(|| {
        format!(
            "failed to load snapshots from {}",
            config.data_dir.display()
        )
    })?;
    if store.doctors().is_empty() && store.patients().is_empty() {
        tracing::info!("No snapshots found, starting with an empty registry");
    } else {
        tracing::info!(
            "Loaded {} doctors and {} patients",
            store.doctors().len(),
            store.patients().len()
        );
    }

    // 2. Request pipeline (auth first, then access logging):
    let pipeline = Pipeline::new(
        Arc::new(AuthGate::new(config.auth_key.clone())),
        Arc::new(AccessLog::new(&config.access_log)),
    );
    tracing::info!(
        "Request pipeline {:?}, access log at {}",
        pipeline.stages(),
        pipeline.access_log().path().display()
    );

    // 3. HTTP Router:
    let app = build_router(&store, &pipeline);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
