//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use contentcraft::TextGenerator;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::{self, AppState};

/// Build the full axum router.
pub fn build_router(generator: Option<Arc<dyn TextGenerator>>) -> Router {
    let state = AppState { generator };

    Router::new()
        .route("/", get(api::get_index))
        .route("/api/options", get(api::get_options))
        .route("/api/generate", post(api::post_generate))
        .route("/api/health", get(api::get_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener, start serving on a background task, and return the
/// bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> Result<SocketAddr, String> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("failed to read bound address: {e}"))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("web server stopped: {e}");
        }
    });

    info!("Listening on http://{addr}");
    Ok(addr)
}
