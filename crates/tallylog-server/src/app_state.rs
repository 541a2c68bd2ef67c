//! Shared application state.
//!
//! Config, track log and counter are built once at startup and handed to the
//! router. Tests inject their own `KvStore` instead of patching globals.

use std::sync::Arc;

use crate::config::{ServiceConfig, StoreBackend};
use crate::store::{Counter, KvStore, MemoryStore, RedisStore};
use crate::tracklog::TrackLog;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    track_log: TrackLog,
    counter: Counter,
}

impl AppState {
    /// Build state around an explicit store.
    pub fn new(cfg: ServiceConfig, store: Arc<dyn KvStore>) -> Self {
        let track_log = TrackLog::from_config(&cfg);
        let counter = Counter::new(store);
        Self {
            inner: Arc::new(AppStateInner {
                track_log,
                counter,
            }),
        }
    }

    /// Build state with the backend selected in `cfg`.
    pub fn from_config(cfg: ServiceConfig) -> Self {
        let store: Arc<dyn KvStore> = match cfg.store_backend {
            StoreBackend::Redis => Arc::new(RedisStore::new(cfg.store_url())),
            StoreBackend::Memory => {
                tracing::warn!("using in-memory counter store; counts reset on restart");
                Arc::new(MemoryStore::new())
            }
        };
        Self::new(cfg, store)
    }

    pub fn track_log(&self) -> &TrackLog {
        &self.inner.track_log
    }

    pub fn counter(&self) -> &Counter {
        &self.inner.counter
    }
}
