//! tallylog server library entry.
//!
//! Wires configuration, the append-only track log, the counter store and the
//! HTTP transport into one router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod store;
pub mod tracklog;
pub mod transport;
