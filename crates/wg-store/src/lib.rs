//! # wg-store
//!
//! The shared puzzle collection: a single JSON file holding an array of
//! [`Puzzle`] records keyed by title.
//!
//! Every mutation is a whole-collection read-modify-write. Mutations run
//! under a cross-process lock file (see [`lock`]) and replace the file
//! through a temp file + rename, so concurrent writers serialize instead of
//! losing each other's updates and readers never see a half-written file.

pub mod error;
pub mod lock;
pub mod update;

pub use error::StoreError;
pub use update::{PuzzleUpdate, PuzzleUpdateBuilder};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wg_config::StoreConfig;
use wg_core::Puzzle;
use wg_core::puzzle::{validate_quality, validate_title, validate_words};

/// Handle on the puzzle collection file.
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    path: PathBuf,
    lock_timeout: Duration,
    pretty: bool,
}

impl PuzzleStore {
    /// Store at `path` with a 10 s lock timeout and pretty output.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: Duration::from_secs(10),
            pretty: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            lock_timeout: Duration::from_secs(config.lock_timeout_secs),
            pretty: config.pretty,
        }
    }

    #[must_use]
    pub const fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All puzzles in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Json`] if the file cannot
    /// be read or parsed. A missing file is an empty collection.
    pub async fn list(&self) -> Result<Vec<Puzzle>, StoreError> {
        self.read_collection().await
    }

    /// The puzzle with this title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if absent, or a storage error.
    pub async fn get(&self, title: &str) -> Result<Puzzle, StoreError> {
        self.read_collection()
            .await?
            .into_iter()
            .find(|p| p.title == title)
            .ok_or_else(|| StoreError::NotFound(title.to_string()))
    }

    /// Append a new puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTitle`] if the title is taken,
    /// [`StoreError::Validation`] for a bad shape, or a storage error.
    pub async fn create(&self, puzzle: Puzzle) -> Result<(), StoreError> {
        puzzle.validate()?;
        let title = puzzle.title.clone();
        self.mutate(move |puzzles| {
            if puzzles.iter().any(|p| p.title == puzzle.title) {
                return Err(StoreError::DuplicateTitle(puzzle.title));
            }
            puzzles.push(puzzle);
            Ok(())
        })
        .await?;
        tracing::info!(%title, "puzzle created");
        Ok(())
    }

    /// Merge `update` onto the stored puzzle with the same title.
    ///
    /// Returns the merged record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no puzzle has this title,
    /// [`StoreError::Validation`] for a bad shape, or a storage error.
    pub async fn save(&self, update: PuzzleUpdate) -> Result<Puzzle, StoreError> {
        validate_title(&update.title)?;
        if let Some(words) = &update.words {
            validate_words(words)?;
        }
        if let Some(quality) = update.quality {
            validate_quality(quality)?;
        }
        let title = update.title.clone();
        let saved = self
            .mutate(move |puzzles| {
                let existing = puzzles
                    .iter_mut()
                    .find(|p| p.title == update.title)
                    .ok_or_else(|| StoreError::NotFound(update.title.clone()))?;
                update.apply_to(existing);
                Ok(existing.clone())
            })
            .await?;
        tracing::info!(%title, "puzzle saved");
        Ok(saved)
    }

    /// Set only the `quality` field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no puzzle has this title,
    /// [`StoreError::Validation`] if `quality` is outside `[0, 100]`, or a
    /// storage error.
    pub async fn update_quality(&self, title: &str, quality: f64) -> Result<(), StoreError> {
        validate_quality(quality)?;
        self.mutate(|puzzles| {
            let existing = puzzles
                .iter_mut()
                .find(|p| p.title == title)
                .ok_or_else(|| StoreError::NotFound(title.to_string()))?;
            existing.quality = Some(quality);
            Ok(())
        })
        .await?;
        tracing::info!(%title, quality, "puzzle quality updated");
        Ok(())
    }

    /// Locked read-modify-write. Nothing is written if `apply` fails.
    async fn mutate<T, F>(&self, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Vec<Puzzle>) -> Result<T, StoreError>,
    {
        let _lock = lock::acquire(&self.path, self.lock_timeout).await?;
        let mut puzzles = self.read_collection().await?;
        let out = apply(&mut puzzles)?;
        self.write_collection(&puzzles)?;
        Ok(out)
    }

    async fn read_collection(&self) -> Result<Vec<Puzzle>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no collection file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let puzzles: Vec<Puzzle> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = puzzles.len(), "collection read");
        Ok(puzzles)
    }

    fn write_collection(&self, puzzles: &[Puzzle]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let body = if self.pretty {
            serde_json::to_vec_pretty(puzzles)?
        } else {
            serde_json::to_vec(puzzles)?
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        tmp.write_all(&body)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        tracing::debug!(path = %self.path.display(), count = puzzles.len(), "collection written");
        Ok(())
    }
}
