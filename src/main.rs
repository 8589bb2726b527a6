//! Metro Claim Server: first-come station reservations for the Paris metro
//!
//! Main entry point that wires all crates together and starts the server.

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use metro_api::{AppState, run_server};
use metro_core::config::AppConfig;
use metro_core::error::AppError;
use metro_reservation::LimitSweeper;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("METRO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Metro Claim v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let sweep_interval = config.reservation.sweep_interval();

    // ── Step 1: Wire catalog, limiter, registry, realtime ────────
    let state = AppState::from_config(config);

    // ── Step 2: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 3: Start rate-limit sweeper ─────────────────────────
    let sweeper_handle = match sweep_interval {
        Some(interval) => {
            let sweeper = LimitSweeper::new(state.reservations.clone(), interval);
            let cancel = shutdown_rx.clone();
            Some(tokio::spawn(async move { sweeper.run(cancel).await }))
        }
        None => {
            tracing::info!("Rate-limit sweeper disabled");
            None
        }
    };

    // ── Step 4: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    run_server(state, listener, async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    })
    .await?;

    // ── Step 5: Wait for background tasks ────────────────────────
    if let Some(handle) = sweeper_handle {
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("Metro Claim server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
