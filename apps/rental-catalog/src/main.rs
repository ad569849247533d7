//! Rental Catalog Binary
//!
//! Serves the rental property catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rental-catalog
//! ```
//!
//! # Environment Variables
//!
//! - `RENTAL_CATALOG_CONFIG`: Path to the YAML config (default: config.yaml if present)
//! - `RUST_LOG`: Log filter (default: level from config)

use std::sync::Arc;

use anyhow::Context;
use rental_catalog::config::{Config, LoggingConfig, load_config_from_env};
use rental_catalog::infrastructure::http::{AppState, create_router};
use rental_catalog::infrastructure::persistence::TursoCatalogStore;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_config_from_env().context("loading configuration")?;
    init_tracing(&config.observability.logging);

    tracing::info!("Starting Rental Catalog");
    log_config(&config);

    let store = TursoCatalogStore::open(&config.persistence.db_path)
        .await
        .with_context(|| format!("opening database '{}'", config.persistence.db_path))?;
    let app = create_router(AppState::new(Arc::new(store)));

    let http_addr = config
        .server
        .socket_addr()
        .context("parsing server address")?;
    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("binding {http_addr}"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /add");
    tracing::info!("  POST /add");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Rental catalog stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this crate.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rental_catalog={level},warn",
            level = logging.level.to_lowercase()
        ))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.is_json() {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        bind_address = %config.server.bind_address,
        http_port = config.server.http_port,
        db_path = %config.persistence.db_path,
        log_format = %config.observability.logging.format,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// receive termination signals should fail at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    tracing::info!("Graceful shutdown started, draining in-flight requests");
}
