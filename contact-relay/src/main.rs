//! Contact-form email relay server

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_relay::{config, routes, sender_from_config, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, refusing to start without credentials
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!();
            eprintln!("{}", config::USAGE);
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "Loaded configuration");

    // The Resend client is blocking, so build it off the runtime threads
    let transport = config.transport.clone();
    let email_sender = tokio::task::spawn_blocking(move || sender_from_config(transport))
        .await?
        .map_err(|e| anyhow!(e))?;

    let state = Arc::new(AppState::new(email_sender));
    let app = routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Email relay listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
