//! Uniform JSON response envelope and the error-to-HTTP translation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use tallylog_core::error::TallyError;

/// `{ success, reason?, count? }`
///
/// `count` is only emitted by the count route, where "never set" is `null`.
#[derive(Debug, Serialize, PartialEq)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Option<i64>>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            success: true,
            reason: None,
            count: None,
        }
    }

    pub fn with_count(count: Option<i64>) -> Self {
        Self {
            count: Some(count),
            ..Self::ok()
        }
    }

    pub fn failure(err: &TallyError) -> Self {
        Self {
            success: false,
            reason: Some(err.client_message()),
            count: None,
        }
    }
}

/// Handler-level failure. The only place errors become HTTP responses.
/// The full error, paths included, goes to the log; clients get
/// [`TallyError::client_message`].
#[derive(Debug)]
pub struct ApiFailure(pub TallyError);

impl From<TallyError> for ApiFailure {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let code = self.0.client_code().as_str();
        let status = match self.0 {
            TallyError::BadRequest(_) => {
                tracing::warn!(code, error = %self.0, "rejected request");
                StatusCode::BAD_REQUEST
            }
            _ => {
                tracing::error!(code, error = ?self.0, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(Envelope::failure(&self.0))).into_response()
    }
}
