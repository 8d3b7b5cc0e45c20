//! HTTP and WebSocket server

pub mod error;
pub mod handlers;
pub mod router;
pub mod ws;

pub use error::ServerError;
pub use router::{AppState, build_router};

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `router` on `listener` until `cancel` fires
pub async fn serve(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
}
