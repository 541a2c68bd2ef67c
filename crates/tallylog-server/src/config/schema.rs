use std::path::PathBuf;

/// Which key-value backend holds the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Redis,
    /// In-process map; the counter is lost on restart.
    Memory,
}

/// Process-wide settings, resolved once at startup.
///
/// Ports and host are kept as given. A bad value shows up when the listener
/// binds or the store connects, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub listen_port: String,
    pub store_host: String,
    pub store_port: String,
    pub store_backend: StoreBackend,
    pub data_dir: PathBuf,
    pub track_file_name: String,
    pub lock: LockSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSection {
    /// Extra attempts after the first failed one.
    pub retries: u32,
    pub retry_wait_ms: u64,
}

impl Default for LockSection {
    fn default() -> Self {
        Self {
            retries: default_lock_retries(),
            retry_wait_ms: default_lock_retry_wait_ms(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            store_host: default_store_host(),
            store_port: default_store_port(),
            store_backend: StoreBackend::default(),
            data_dir: PathBuf::from(default_data_dir()),
            track_file_name: default_track_file_name(),
            lock: LockSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }

    pub fn store_url(&self) -> String {
        format!("redis://{}:{}/", self.store_host, self.store_port)
    }

    pub fn track_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.track_file_name)
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.data_dir.join(format!("lock_{}", self.track_file_name))
    }
}

pub(crate) fn default_listen_port() -> String {
    "8080".into()
}
pub(crate) fn default_store_host() -> String {
    "localhost".into()
}
pub(crate) fn default_store_port() -> String {
    "9090".into()
}
pub(crate) fn default_data_dir() -> String {
    "./data".into()
}
pub(crate) fn default_track_file_name() -> String {
    "track.txt".into()
}
pub(crate) fn default_lock_retries() -> u32 {
    50
}
pub(crate) fn default_lock_retry_wait_ms() -> u64 {
    100
}
