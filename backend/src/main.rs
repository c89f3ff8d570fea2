use std::io::ErrorKind;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use backend::config::env_config::Config;
use backend::utils::logging::init_tracing;
use backend::{app, AppState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Server stopped");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    init_tracing();

    if !config.bot_configured() {
        warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set, leads will not be forwarded");
    }
    if let Some(dir) = &config.static_dir {
        info!("Serving site from {}", dir.display());
    }

    let addr = config.socket_addr();
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            error!(
                "Port {} is already in use, try another one, e.g. PORT={}",
                port,
                port.saturating_add(1)
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    info!("Lead relay listening on http://{}", addr);
    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
