//! HTTP transport: route handlers, body extraction and the response envelope.

pub mod envelope;
pub mod payload;

use axum::{extract::State, Json};

use crate::app_state::AppState;

pub use envelope::{ApiFailure, Envelope};
pub use payload::TrackPayload;

/// `POST /track`
///
/// Appends the record; with a `count` field the counter is updated alongside.
/// Both operations run to completion before the response is decided.
pub async fn track(
    State(app): State<AppState>,
    TrackPayload(record): TrackPayload,
) -> Result<Json<Envelope>, ApiFailure> {
    match record.count() {
        Some(delta) => {
            let (appended, counted) = tokio::join!(
                app.track_log().append(&record),
                app.counter().add(delta),
            );
            appended?;
            let total = counted?;
            tracing::info!(fields = record.fields().len(), total, "tracked with count");
        }
        None => {
            app.track_log().append(&record).await?;
            tracing::info!(fields = record.fields().len(), "tracked");
        }
    }
    Ok(Json(Envelope::ok()))
}

/// `GET /count`
pub async fn count(State(app): State<AppState>) -> Result<Json<Envelope>, ApiFailure> {
    let count = app.counter().get().await?;
    Ok(Json(Envelope::with_count(count)))
}
