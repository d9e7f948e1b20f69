//! Cross-process write lock for the puzzle collection.
//!
//! The lock is a sibling file `<collection>.lock` created with
//! `create_new`, holding the owner's pid. A lock whose pid is no longer
//! running is treated as stale and removed, but only while the file still
//! names that pid, so a lock freshly taken by another writer survives.

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::StoreError;

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Removes the lock file when dropped.
#[derive(Debug)]
pub struct CollectionLock {
    path: PathBuf,
}

impl CollectionLock {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CollectionLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Lock file path for a collection file.
#[must_use]
pub fn lock_path_for(collection: &Path) -> PathBuf {
    let mut name = collection.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Wait up to `timeout` for the collection lock.
///
/// # Errors
///
/// Returns [`StoreError::Lock`] if a live process still holds the lock, or
/// the lock file is unreadable, when the timeout elapses.
pub async fn acquire(collection: &Path, timeout: Duration) -> Result<CollectionLock, StoreError> {
    let lock_path = lock_path_for(collection);
    let started = Instant::now();

    loop {
        match try_acquire(&lock_path) {
            Ok(guard) => return Ok(guard),
            Err(LockState::HeldBy(pid)) => {
                if started.elapsed() >= timeout {
                    return Err(StoreError::Lock(format!(
                        "another writer is running (pid {pid}); try again after it finishes"
                    )));
                }
                tracing::debug!(pid, path = %lock_path.display(), "collection locked, waiting");
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
            Err(LockState::Stale(pid)) => {
                if remove_stale_lock(&lock_path, pid) {
                    tracing::warn!(pid, path = %lock_path.display(), "removed stale collection lock");
                }
            }
            Err(LockState::Unknown) => {
                if started.elapsed() >= timeout {
                    return Err(StoreError::Lock(format!(
                        "could not acquire {}; remove it if no wordgrid process is running",
                        lock_path.display()
                    )));
                }
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
        }
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(u32),
    Stale(u32),
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<CollectionLock, LockState> {
    if let Some(parent) = lock_path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(CollectionLock {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut pid_buf = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut pid_buf))
                .is_err()
            {
                return Err(LockState::Unknown);
            }

            match pid_buf.trim().parse::<u32>().ok() {
                Some(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Some(pid) => Err(LockState::Stale(pid)),
                None => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

fn read_lock_pid(lock_path: &Path) -> Option<u32> {
    std::fs::read_to_string(lock_path).ok()?.trim().parse().ok()
}

/// Remove the lock file if it still belongs to `stale_pid`.
fn remove_stale_lock(lock_path: &Path, stale_pid: u32) -> bool {
    if read_lock_pid(lock_path) != Some(stale_pid) {
        return false;
    }
    std::fs::remove_file(lock_path).is_ok()
}

fn is_process_running(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquires_and_releases_lock_file() {
        let temp = tempfile::tempdir().unwrap();
        let collection = temp.path().join("puzzles.json");
        let lock_path = lock_path_for(&collection);

        let guard = try_acquire(&lock_path).unwrap();
        assert!(lock_path.is_file());
        assert_eq!(guard.path(), lock_path);
        drop(guard);
        assert!(!lock_path.exists());
    }

    #[test]
    fn lock_path_appends_suffix() {
        assert_eq!(
            lock_path_for(Path::new("public/word_puzzles.json")),
            PathBuf::from("public/word_puzzles.json.lock")
        );
    }

    #[test]
    fn stale_removal_spares_a_replaced_lock() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = lock_path_for(&temp.path().join("puzzles.json"));

        std::fs::write(&lock_path, "4242\n").unwrap();
        assert!(!remove_stale_lock(&lock_path, 1717));
        assert_eq!(read_lock_pid(&lock_path), Some(4242));

        assert!(remove_stale_lock(&lock_path, 4242));
        assert!(!lock_path.exists());
        assert!(!remove_stale_lock(&lock_path, 4242));
    }

    #[tokio::test]
    async fn live_holder_times_out() {
        let temp = tempfile::tempdir().unwrap();
        let collection = temp.path().join("puzzles.json");
        let _held = acquire(&collection, Duration::ZERO).await.unwrap();

        let err = acquire(&collection, Duration::ZERO).await.unwrap_err();
        assert!(matches!(err, StoreError::Lock(_)));
    }

    #[tokio::test]
    async fn garbage_lock_times_out() {
        let temp = tempfile::tempdir().unwrap();
        let collection = temp.path().join("puzzles.json");
        std::fs::write(lock_path_for(&collection), "not a pid").unwrap();

        let err = acquire(&collection, Duration::ZERO).await.unwrap_err();
        assert!(matches!(err, StoreError::Lock(_)));
    }
}
