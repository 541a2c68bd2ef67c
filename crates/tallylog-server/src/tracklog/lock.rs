//! Advisory lock around track log writes.
//!
//! The lock is an exclusive `flock` on a sidecar file (`lock_<name>`), so it
//! also excludes other processes appending to the same path. Acquisition polls
//! with a fixed wait instead of blocking a runtime thread on the syscall.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fs2::FileExt;
use tallylog_core::error::{Result, TallyError};

use crate::config::LockSection;

/// Retry budget for lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    pub retry_wait: Duration,
}

impl LockPolicy {
    pub fn attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl From<LockSection> for LockPolicy {
    fn from(s: LockSection) -> Self {
        Self {
            retries: s.retries,
            retry_wait: Duration::from_millis(s.retry_wait_ms),
        }
    }
}

/// Held lock. Unlocks when dropped, on every exit path.
#[derive(Debug)]
pub struct TrackLockGuard {
    file: Option<File>,
    path: PathBuf,
}

impl Drop for TrackLockGuard {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = FileExt::unlock(&file) {
                // Closing the descriptor below releases the flock anyway.
                tracing::warn!(path = %self.path.display(), error = %e, "explicit unlock failed");
            }
        }
    }
}

/// Acquire the lock at `path`, retrying on contention per `policy`.
pub async fn acquire(path: &Path, policy: LockPolicy) -> Result<TrackLockGuard> {
    let attempts = policy.attempts();

    for attempt in 1..=attempts {
        let p = path.to_path_buf();
        let taken = tokio::task::spawn_blocking(move || try_lock(&p))
            .await
            .map_err(|e| TallyError::Internal(format!("lock task failed: {e}")))??;

        if let Some(file) = taken {
            if attempt > 1 {
                tracing::debug!(path = %path.display(), attempt, "track lock acquired after contention");
            }
            return Ok(TrackLockGuard {
                file: Some(file),
                path: path.to_path_buf(),
            });
        }

        if attempt < attempts {
            tracing::trace!(path = %path.display(), attempt, "track lock busy, retrying");
            tokio::time::sleep(policy.retry_wait).await;
        }
    }

    tracing::warn!(path = %path.display(), attempts, "track lock retries exhausted");
    Err(TallyError::LockExhausted {
        path: path.display().to_string(),
        attempts,
    })
}

/// One non-blocking attempt. `Ok(None)` means someone else holds the lock.
fn try_lock(path: &Path) -> Result<Option<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map_err(|e| TallyError::Storage(format!("open lock file {}: {e}", path.display())))?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(Some(file)),
        Err(e) if is_contended(&e) => Ok(None),
        Err(e) => Err(TallyError::Storage(format!(
            "lock {}: {e}",
            path.display()
        ))),
    }
}

fn is_contended(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::WouldBlock
        || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
