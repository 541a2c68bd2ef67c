//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/track", post(transport::track))
        .route("/count", get(transport::count))
        .route("/healthz", get(ops::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
