use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use exec_gateway::{Envelope, Gateway, GatewayConfig, RawRequest};
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] exec_gateway::Error),
    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Clone)]
pub struct AppState {
    gateway: Arc<Gateway>,
}

pub fn create_app(config: GatewayConfig) -> Result<Router, ServerError> {
    let gateway = Gateway::new(config)?;

    let state = AppState {
        gateway: Arc::new(gateway),
    };

    let cors = CorsLayer::permissive();

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/execute", post(execute))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting execution gateway server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

/// The body is taken raw so malformed JSON still reaches the gateway's
/// normalizer. Every outcome is an HTTP 200 carrying the envelope; failures
/// are reported inside it.
async fn execute(State(state): State<AppState>, body: String) -> Json<Envelope> {
    let raw = RawRequest::from_body(body);
    Json(state.gateway.handle(&raw).await)
}
