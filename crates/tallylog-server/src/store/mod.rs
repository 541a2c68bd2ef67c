//! Counter storage.
//!
//! `KvStore` is the seam to the external key-value store; `Counter` is the one
//! read-modify-write the service performs on it.

pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use tallylog_core::coerce::{coerce_str, coerce_value};
use tallylog_core::error::Result;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Key holding the counter.
pub const COUNT_KEY: &str = "count";

/// Minimal get/set surface of a Redis-compatible store.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

/// The persistent counter.
///
/// `add` is a plain get-then-set. Two concurrent adds can read the same prior
/// value, and then one increment is lost (last writer wins).
#[derive(Clone)]
pub struct Counter {
    store: Arc<dyn KvStore>,
    key: String,
}

impl Counter {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key(store, COUNT_KEY)
    }

    pub fn with_key(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Current value, or `None` if the key was never set.
    pub async fn get(&self) -> Result<Option<i64>> {
        Ok(self.store.get(&self.key).await?.map(|s| coerce_str(&s)))
    }

    /// Add a loosely coerced `delta`; an unset counter counts as 0.
    /// Returns the stored total.
    pub async fn add(&self, delta: &Value) -> Result<i64> {
        let current = self.store.get(&self.key).await?;
        let base = current.as_deref().map(coerce_str).unwrap_or(0);
        let total = base.saturating_add(coerce_value(delta));

        self.store.set(&self.key, total.to_string()).await?;
        tracing::debug!(key = %self.key, base, total, "counter updated");
        Ok(total)
    }
}
