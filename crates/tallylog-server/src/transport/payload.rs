//! Track body extractor.
//!
//! - `application/json` (and `+json`): must be an object; empty body is `{}`
//! - `application/x-www-form-urlencoded`: flat pairs, string values
//! - anything else: empty record, body ignored

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use tallylog_core::{error::TallyError, TrackRecord};

use super::envelope::ApiFailure;

#[derive(Debug)]
pub struct TrackPayload(pub TrackRecord);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for TrackPayload
where
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| TallyError::BadRequest(format!("read body: {e}")))?;
                if body.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(TrackRecord::default()));
                }
                Ok(Self(TrackRecord::from_json_slice(&body)?))
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| TallyError::BadRequest(format!("invalid form body: {e}")))?;
                Ok(Self(TrackRecord::from_pairs(pairs)))
            }
            BodyKind::Other => Ok(Self(TrackRecord::default())),
        }
    }
}
