//! Persistence slot: the single durable key-value location holding the
//! serialized aggregate.
//!
//! The slot deals in raw text; the versioned envelope around it is handled
//! by the store. Implementations must be safe to call repeatedly - the
//! store rewrites the whole slot on every mutation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised by slot implementations.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Underlying I/O failed.
    #[error("slot i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot rejected the write (used by test doubles to model quota
    /// exhaustion).
    #[error("slot write rejected: {0}")]
    Rejected(String),
}

/// A single durable read/write location for the serialized aggregate.
pub trait PersistenceSlot: Send {
    /// Read the slot contents. `None` means the slot has never been written.
    fn load(&self) -> Result<Option<String>, SlotError>;

    /// Replace the slot contents.
    fn save(&mut self, contents: &str) -> Result<(), SlotError>;
}

/// File-backed slot: one JSON document on disk.
///
/// Writes go to a sibling temp file first and are moved into place, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given path. The file is created on first save;
    /// parent directories are created as needed.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceSlot for FileSlot {
    fn load(&self) -> Result<Option<String>, SlotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(contents))
    }

    fn save(&mut self, contents: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = contents.len(), "slot written");
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    fail_saves: bool,
}

impl MemorySlot {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with contents, as if a previous process had written.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            fail_saves: false,
        }
    }

    /// Slot that rejects every save - models a full/broken backing store.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail_saves: true,
        }
    }

    /// Current contents, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl PersistenceSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>, SlotError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), SlotError> {
        if self.fail_saves {
            return Err(SlotError::Rejected("memory slot set to fail".to_string()));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
