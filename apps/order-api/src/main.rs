//! # Cinos Order API Server
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order API Startup                                    │
//! │                                                                         │
//! │  1. Initialize logging (tracing)                                        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  2. Load configuration (defaults → TOML → CINOS_* env)                  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  3. Load the catalog (menu file or built-in menu)                       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  4. Bind listener and serve until Ctrl-C / SIGTERM                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use cinos_order_api::{init_tracing, router, AppState, ServiceConfig};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Cinos order service");

    let config = ServiceConfig::load(None).context("Failed to load configuration")?;
    let catalog = config.load_catalog().context("Failed to load menu")?;

    info!(
        tax_rate = %catalog.tax_rate(),
        surcharge = %catalog.extra_option_surcharge(),
        "Catalog loaded"
    );

    let app = router(AppState::new(catalog));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, "Order service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
