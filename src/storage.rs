//! Persistence backends for the history blob
//!
//! The history store is written as one serialized blob under a fixed key.
//! The backend is an injected capability so tests can swap the file-backed
//! implementation for an in-memory one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PromptError;

/// File name holding the serialized history list
pub const HISTORY_FILE: &str = "history.json";

/// A key-value persistence capability for the history blob
///
/// `read` returns `Ok(None)` when nothing has been persisted yet. `write`
/// replaces the whole blob; there is no incremental path.
pub trait HistoryBackend {
    fn read(&self) -> Result<Option<String>, PromptError>;
    fn write(&self, blob: &str) -> Result<(), PromptError>;
}

/// Stores the blob as a single JSON file under the store directory
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at the given store directory, creating it if needed
    pub fn open(store_dir: impl AsRef<Path>) -> Result<Self, PromptError> {
        let store_dir = store_dir.as_ref();
        fs::create_dir_all(store_dir)?;
        let path = store_dir.join(HISTORY_FILE);
        debug!(?path, "Opened history backend");
        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>, PromptError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PromptError::StorageUnavailable(e)),
        }
    }

    fn write(&self, blob: &str) -> Result<(), PromptError> {
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory backend used as a test double
#[derive(Default)]
pub struct MemoryBackend {
    blob: std::sync::Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the backend with a blob, as if a previous session persisted it
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: std::sync::Mutex::new(Some(blob.into())),
        }
    }
}

impl HistoryBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, PromptError> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn write(&self, blob: &str) -> Result<(), PromptError> {
        *self.blob.lock().unwrap() = Some(blob.to_string());
        Ok(())
    }
}
