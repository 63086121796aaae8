//! PromptForge - local prompt-template generator
//!
//! Pick an AI-model category (text, image, code, audio), fill in its labeled
//! fields, and get back a filled-in prompt. Results can be copied to the
//! clipboard and kept in a bounded local history. Everything runs locally;
//! there is no network, no server, no account.
//!
//! # Architecture
//!
//! ```text
//! catalog   fixed category -> template/fields/hints table
//! compose   {{name}} substitution with a [NOT SPECIFIED] sentinel
//! history   capped newest-first list of generated prompts
//! storage   injected read/write backend for the history blob
//! clipboard write-only OS clipboard capability
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptforge::{Category, FieldValues, compose};
//!
//! let mut values = FieldValues::new();
//! values.insert("goal".to_string(), "write a poem".to_string());
//! let prompt = compose(Category::Text, &values);
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod compose;
pub mod config;
pub mod error;
pub mod history;
pub mod storage;

pub use catalog::Category;
pub use clipboard::{Clipboard, MemoryClipboard, OsClipboard};
pub use compose::{FieldValues, compose};
pub use config::Config;
pub use error::PromptError;
pub use history::{HistoryStore, PromptRecord};
pub use storage::{HistoryBackend, JsonFileBackend, MemoryBackend};

/// Maximum number of history entries kept
pub const HISTORY_CAP: usize = 10;

/// Literal substituted for unfilled placeholders
pub const SENTINEL: &str = "[NOT SPECIFIED]";
