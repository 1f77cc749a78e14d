//! corkboard-server binary: HTTP + WebSocket surface over the engine

mod config;
mod routes;
mod ws;

use config::ServerConfig;
use corkboard::store::MemoryStore;
use corkboard::CorkboardContext;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let ctx = Arc::new(CorkboardContext::new(
        Arc::new(MemoryStore::new()),
        config.secret.as_bytes().to_vec(),
    ));

    let app = routes::router(ctx).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, "corkboard server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
