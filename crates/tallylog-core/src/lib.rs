//! tallylog core: transport-agnostic record model, error types, and the loose
//! integer coercion used by the counter.
//!
//! This crate carries no runtime or I/O dependencies so the server, tests, and
//! any offline tooling that reads the track log can share the same types.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed payloads surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod coerce;
pub mod error;
pub mod record;

/// Shared result type.
pub use error::{Result, TallyError};
pub use record::TrackRecord;
