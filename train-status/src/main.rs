use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use train_status::config::ServerConfig;
use train_status::upstream::UpstreamClient;
use train_status::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "train_status=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::default();

    let upstream = UpstreamClient::new(config.upstream.clone())?;
    let hosts: Vec<_> = upstream.hosts().iter().map(|h| h.base_url()).collect();
    info!(?hosts, "upstream hosts configured");

    let app = create_router(AppState::new(upstream));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "train status server listening");
    info!("  GET  /health");
    info!("  GET  /api/train/{{trainNumber}}/station/{{stationCode}}");

    axum::serve(listener, app).await?;
    Ok(())
}
