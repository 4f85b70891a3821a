//! Integer-sum REST API server: /sum_integers/.

use std::net::SocketAddr;
use sum_api::server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = server::router();
    let addr: SocketAddr = std::env::var("SUM_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:8001".to_string())
        .parse()?;
    tracing::info!("sum API listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
