use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::answer_handler::answer;
use crate::application::ConverseUseCase;

pub const ANSWER_ROUTE: &str = "/api/answer";

#[derive(Clone)]
pub struct AppState {
    pub converse: Arc<ConverseUseCase>,
}

impl AppState {
    pub fn new(converse: Arc<ConverseUseCase>) -> Self {
        Self { converse }
    }
}

/// The answer route accepts every method so body checks can run before the method check.
pub fn build_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route(ANSWER_ROUTE, any(answer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: axum::Router) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    info!("Answer endpoint listening on http://{}{}", addr, ANSWER_ROUTE);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
