//! Application builder and server runner.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use metro_core::AppResult;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Serves the application on `listener` until `shutdown` resolves.
///
/// Open observer sockets are told to close before the server drains.
pub async fn run_server<F>(
    state: AppState,
    listener: TcpListener,
    shutdown: F,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let realtime = state.realtime.clone();
    let app = build_app(state);

    info!(address = %listener.local_addr()?, "Metro Claim server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown.await;
        realtime.shutdown();
    })
    .await?;

    info!("Server stopped");
    Ok(())
}
