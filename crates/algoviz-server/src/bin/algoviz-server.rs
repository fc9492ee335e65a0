//! Algoviz Steps Server
//!
//! Serve step-event generation over HTTP. An optional first argument
//! overrides the listen port from the environment.

use algoviz_server::{ServerConfig, StepsServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoviz_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = env::args().nth(1) {
        config = config.with_port(port.parse()?);
    }

    tracing::info!("Starting steps server");
    if config.backend_url.is_none() {
        tracing::info!("No BACKEND_URL set, serving from the local engine only");
    }

    let server = StepsServer::new(&config)?;
    server.serve(config.addr).await?;

    Ok(())
}
