use crate::state::AppState;
use crate::{Error, Result};
use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub async fn start_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    serve(listener, state).await
}

/// Serve on an already-bound listener (tests bind to port 0).
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, create_app(state))
        .await
        .map_err(Error::Io)
}

/// Request bodies are unbounded: `/chat` carries whole images as base64.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(super::routes::create_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
