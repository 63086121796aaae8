//! Clipboard capability
//!
//! Write-only. The OS implementation pipes the text into the first platform
//! clipboard utility it finds. Failure is recoverable: callers surface it as
//! a notice and keep going.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::PromptError;

/// A write-only clipboard sink
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), PromptError>;
}

/// Clipboard backed by the platform utility (pbcopy, wl-copy, xclip, clip)
#[derive(Default)]
pub struct OsClipboard;

impl OsClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Candidate writer commands, tried in order
    fn candidates() -> &'static [&'static [&'static str]] {
        &[
            &["pbcopy"],
            &["wl-copy"],
            &["xclip", "-selection", "clipboard"],
            &["xsel", "--clipboard", "--input"],
            &["clip.exe"],
        ]
    }

    fn pipe_to(cmd: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(cmd[0])
            .args(&cmd[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        Ok(status.success())
    }
}

impl Clipboard for OsClipboard {
    fn copy(&self, text: &str) -> Result<(), PromptError> {
        for cmd in Self::candidates() {
            match Self::pipe_to(cmd, text) {
                Ok(true) => {
                    debug!(tool = cmd[0], "Copied to clipboard");
                    return Ok(());
                }
                Ok(false) => {
                    return Err(PromptError::ClipboardDenied(format!("{} exited with failure", cmd[0])));
                }
                // Utility not installed, try the next one
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(PromptError::ClipboardDenied(e.to_string())),
            }
        }
        Err(PromptError::ClipboardDenied(
            "no clipboard utility found (tried pbcopy, wl-copy, xclip, xsel, clip.exe)".to_string(),
        ))
    }
}

/// In-memory clipboard used as a test double
#[derive(Default)]
pub struct MemoryClipboard {
    last: std::sync::Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied text, if any
    pub fn contents(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), PromptError> {
        *self.last.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
