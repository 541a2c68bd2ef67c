//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness (does not touch the store or the data directory)

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
