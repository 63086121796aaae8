//! CLI argument parsing for promptforge

use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use std::path::PathBuf;

use crate::catalog::Category;

#[derive(Parser, Debug)]
#[command(name = "pf")]
#[command(author, version, about = "Prompt template generator with local history", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported categories
    Categories,

    /// Show the input fields and hints for a category
    Fields {
        /// Category (text, image, code, audio)
        #[arg(required = true)]
        category: Category,
    },

    /// Print the raw template for a category
    Template {
        /// Category (text, image, code, audio)
        #[arg(required = true)]
        category: Category,
    },

    /// Fill a category's template with field values
    Compose {
        /// Category (text, image, code, audio)
        #[arg(required = true)]
        category: Category,

        /// Field value as name=value (repeatable)
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Append the result to the local history
        #[arg(short, long)]
        save: bool,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List saved prompts, newest first
    History,

    /// Remove a history entry by its timestamp
    Remove {
        /// Timestamp key of the entry to remove
        #[arg(required = true)]
        timestamp: String,
    },
}

/// Split a `name=value` field argument
pub fn parse_field(spec: &str) -> Result<(String, String)> {
    match spec.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(eyre!("Invalid field '{}': expected name=value", spec)),
    }
}
