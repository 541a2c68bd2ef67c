//! Top-level facade crate for tallylog.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use tallylog_core::*;
}

pub mod server {
    pub use tallylog_server::*;
}
