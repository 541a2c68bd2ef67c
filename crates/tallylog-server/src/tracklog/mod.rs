//! Append-only track log (JSON lines).
//!
//! Each append runs the same sequential chain: ensure the data directory,
//! take the advisory lock, append one full line, release the lock. Separate
//! appends interleave freely; the lock only excludes the write step.

pub mod lock;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tallylog_core::error::{Result, TallyError};
use tallylog_core::TrackRecord;

use crate::config::ServiceConfig;

pub use lock::{LockPolicy, TrackLockGuard};

#[derive(Debug, Clone)]
pub struct TrackLog {
    dir: PathBuf,
    file_path: PathBuf,
    lock_path: PathBuf,
    policy: LockPolicy,
}

impl TrackLog {
    pub fn new(dir: impl Into<PathBuf>, file_name: &str, policy: LockPolicy) -> Self {
        let dir = dir.into();
        Self {
            file_path: dir.join(file_name),
            lock_path: dir.join(format!("lock_{file_name}")),
            dir,
            policy,
        }
    }

    pub fn from_config(cfg: &ServiceConfig) -> Self {
        Self::new(cfg.data_dir.clone(), &cfg.track_file_name, cfg.lock.into())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// Append `record` as one line.
    ///
    /// The line is serialized up front and written with a single `write_all`,
    /// so a failed append never leaves half a record behind a good one.
    ///
    /// The lock guard moves into the blocking write. If this future is dropped
    /// mid-write the lock stays held until the write itself returns.
    pub async fn append(&self, record: &TrackRecord) -> Result<()> {
        let line = record.to_line()?;

        self.ensure_dir().await?;
        let guard = lock::acquire(&self.lock_path, self.policy).await?;

        let path = self.file_path.clone();
        let len = line.len();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            append_line(&path, line.as_bytes())
        })
        .await
        .map_err(|e| TallyError::Internal(format!("append task failed: {e}")))??;

        tracing::debug!(path = %self.file_path.display(), bytes = len, "record appended");
        Ok(())
    }

    /// Read every record back, oldest first. A missing file is an empty log.
    pub async fn read_records(&self) -> Result<Vec<TrackRecord>> {
        let s = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TallyError::Storage(format!(
                    "read {}: {e}",
                    self.file_path.display()
                )))
            }
        };

        s.lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(i, l)| {
                TrackRecord::from_json_slice(l.as_bytes()).map_err(|e| {
                    TallyError::Storage(format!(
                        "{} line {}: {e}",
                        self.file_path.display(),
                        i + 1
                    ))
                })
            })
            .collect()
    }

    async fn ensure_dir(&self) -> Result<()> {
        let err = match tokio::fs::create_dir_all(&self.dir).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        // Lost a creation race with another writer.
        if err.kind() == io::ErrorKind::AlreadyExists {
            let is_dir = tokio::fs::metadata(&self.dir)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_dir {
                return Ok(());
            }
        }
        Err(TallyError::Storage(format!(
            "create data dir {}: {err}",
            self.dir.display()
        )))
    }
}

fn append_line(path: &Path, line: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TallyError::Storage(format!("open {}: {e}", path.display())))?;
    file.write_all(line)
        .and_then(|()| file.flush())
        .map_err(|e| TallyError::Storage(format!("append {}: {e}", path.display())))
}
