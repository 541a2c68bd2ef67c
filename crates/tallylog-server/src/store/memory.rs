use async_trait::async_trait;
use dashmap::DashMap;

use tallylog_core::error::Result;

use super::KvStore;

/// In-process store. Values do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Drop every key (test isolation).
    pub fn flush(&self) {
        self.values.clear();
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
