//! Service config loader (environment with per-field defaults).
//!
//! Loading never fails. Empty variables count as unset.

pub mod schema;

use std::path::PathBuf;
use std::str::FromStr;

pub use schema::{LockSection, ServiceConfig, StoreBackend};

pub const ENV_APP_PORT: &str = "APP_PORT";
pub const ENV_REDIS_URL: &str = "REDIS_URL";
pub const ENV_REDIS_PORT: &str = "REDIS_PORT";
pub const ENV_DATA_FOLDER: &str = "DATA_FOLDER";
pub const ENV_TRACK_FILE_NAME: &str = "TRACK_FILE_NAME";
pub const ENV_STORE_BACKEND: &str = "STORE_BACKEND";
pub const ENV_LOCK_RETRIES: &str = "LOCK_RETRIES";
pub const ENV_LOCK_RETRY_WAIT_MS: &str = "LOCK_RETRY_WAIT_MS";

impl ServiceConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let d = ServiceConfig::default();

        Self {
            listen_port: get(ENV_APP_PORT).unwrap_or(d.listen_port),
            store_host: get(ENV_REDIS_URL).unwrap_or(d.store_host),
            store_port: get(ENV_REDIS_PORT).unwrap_or(d.store_port),
            store_backend: get(ENV_STORE_BACKEND)
                .map(|v| parse_backend(&v))
                .unwrap_or(d.store_backend),
            data_dir: get(ENV_DATA_FOLDER).map(PathBuf::from).unwrap_or(d.data_dir),
            track_file_name: get(ENV_TRACK_FILE_NAME).unwrap_or(d.track_file_name),
            lock: LockSection {
                retries: parse_or(ENV_LOCK_RETRIES, get(ENV_LOCK_RETRIES), d.lock.retries),
                retry_wait_ms: parse_or(
                    ENV_LOCK_RETRY_WAIT_MS,
                    get(ENV_LOCK_RETRY_WAIT_MS),
                    d.lock.retry_wait_ms,
                ),
            },
        }
    }
}

fn parse_backend(v: &str) -> StoreBackend {
    match v.to_ascii_lowercase().as_str() {
        "memory" => StoreBackend::Memory,
        "redis" => StoreBackend::Redis,
        other => {
            tracing::warn!(value = %other, "unknown {ENV_STORE_BACKEND}, using redis");
            StoreBackend::Redis
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(%key, value = %s, %default, "unparsable value, using default");
            default
        }),
    }
}
