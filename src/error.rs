//! Core error types

use thiserror::Error;

/// Errors that can occur in the prompt core
///
/// None of these are fatal: every failure path degrades to a safe default
/// (empty history, unchanged list, skipped clipboard write).
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Unknown category: {name} (expected text, image, code or audio)")]
    UnknownCategory { name: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Malformed persisted history: {0}")]
    MalformedPersistedData(#[from] serde_json::Error),

    #[error("Clipboard write failed: {0}")]
    ClipboardDenied(String),
}

impl PromptError {
    /// Check whether this error leaves the history store usable
    ///
    /// Storage and parse failures fall back to the in-memory list;
    /// a clipboard failure only loses the copy.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PromptError::UnknownCategory { .. } => false,
            PromptError::StorageUnavailable(_) => true,
            PromptError::MalformedPersistedData(_) => true,
            PromptError::ClipboardDenied(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = PromptError::UnknownCategory {
            name: "video".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("video"));
        assert!(msg.contains("audio"));
    }

    #[test]
    fn test_recoverability() {
        assert!(!PromptError::UnknownCategory { name: "x".into() }.is_recoverable());
        assert!(PromptError::ClipboardDenied("denied".into()).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro");
        assert!(PromptError::StorageUnavailable(io).is_recoverable());
    }
}
