//! Shared error type across tallylog crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unparsable request body.
    BadRequest,
    /// Data directory or track file I/O failed.
    Storage,
    /// Track log lock could not be acquired within the retry budget.
    LockBusy,
    /// Key-value store unreachable or returned an error.
    Store,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Storage => "STORAGE",
            ClientCode::LockBusy => "LOCK_BUSY",
            ClientCode::Store => "STORE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("storage: {0}")]
    Storage(String),
    #[error("lock {path} still held after {attempts} attempts")]
    LockExhausted { path: String, attempts: u32 },
    #[error("store: {0}")]
    Store(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::Storage(_) => ClientCode::Storage,
            TallyError::LockExhausted { .. } => ClientCode::LockBusy,
            TallyError::Store(_) => ClientCode::Store,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Text safe to hand to clients. Filesystem failures carry server paths in
    /// their `Display` form, so those are reduced to a fixed description here.
    pub fn client_message(&self) -> String {
        match self {
            TallyError::Storage(_) => "track log storage failure".into(),
            TallyError::LockExhausted { attempts, .. } => {
                format!("track log busy after {attempts} attempts")
            }
            TallyError::Internal(_) => "internal error".into(),
            TallyError::BadRequest(_) | TallyError::Store(_) => self.to_string(),
        }
    }
}
