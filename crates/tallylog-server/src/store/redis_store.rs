//! Redis-backed counter store.
//!
//! The connection is opened on first use, so the service comes up even while
//! Redis is unreachable; requests then fail with a `Store` error. A bad host or
//! port also only surfaces here.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::OnceCell;

use tallylog_core::error::{Result, TallyError};

use super::KvStore;

pub struct RedisStore {
    url: String,
    conn: OnceCell<ConnectionManager>,
}

impl RedisStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            conn: OnceCell::new(),
        }
    }

    async fn conn(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let client = redis::Client::open(self.url.as_str())
                    .map_err(|e| TallyError::Store(format!("invalid redis url {}: {e}", self.url)))?;
                let conn = ConnectionManager::new(client)
                    .await
                    .map_err(|e| TallyError::Store(format!("connect {}: {e}", self.url)))?;
                tracing::info!(url = %self.url, "redis connected");
                Ok::<_, TallyError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| TallyError::Store(format!("GET {key}: {e}")))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| TallyError::Store(format!("SET {key}: {e}")))
    }
}
