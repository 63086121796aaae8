use chrono::{DateTime, Local};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};

use promptforge::cli::{Cli, Command, parse_field};
use promptforge::clipboard::{Clipboard, OsClipboard};
use promptforge::config::Config;
use promptforge::history::{HistoryStore, PromptRecord};
use promptforge::storage::{JsonFileBackend, MemoryBackend};
use promptforge::{FieldValues, catalog, compose};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env().filter_level(level).init();
    Ok(())
}

/// Open the history store, degrading to a non-persistent one when the
/// store directory cannot be used
fn open_history(config: &Config) -> HistoryStore {
    match JsonFileBackend::open(&config.store_path) {
        Ok(backend) => HistoryStore::open(Box::new(backend)),
        Err(e) => {
            warn!("Storage unavailable, history will not persist: {}", e);
            HistoryStore::open(Box::new(MemoryBackend::new()))
        }
    }
}

/// Render an RFC 3339 timestamp in local time for display
fn local_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("promptforge starting");

    match cli.command {
        Command::Categories => {
            for cat in promptforge::Category::ALL {
                println!("{:<6} {}", cat.to_string().cyan(), cat.description());
            }
        }
        Command::Fields { category } => {
            for field in catalog::field_names(category) {
                let hint = catalog::hint(category, field).unwrap_or_default();
                println!("{:<14} {}", field.cyan(), hint.dimmed());
            }
        }
        Command::Template { category } => {
            println!("{}", catalog::template(category));
        }
        Command::Compose {
            category,
            fields,
            save,
            copy,
        } => {
            let mut values = FieldValues::new();
            for spec in &fields {
                let (name, value) = parse_field(spec)?;
                if catalog::hint(category, &name).is_none() {
                    eprintln!("{}", format!("note: '{}' is not a {} field, ignored", name, category).yellow());
                }
                values.insert(name, value);
            }

            let prompt = compose(category, &values);
            println!("{}", prompt);

            if save {
                let mut history = open_history(&config);
                let record = PromptRecord::new(category, prompt.clone());
                let timestamp = record.timestamp.clone();
                match history.append(record) {
                    Ok(_) => eprintln!("{} Saved to history ({})", "✓".green(), timestamp.dimmed()),
                    // In-memory list is updated; only the persist failed
                    Err(e) => eprintln!("{}", format!("note: history not persisted: {}", e).yellow()),
                }
            }

            if copy {
                match OsClipboard::new().copy(&prompt) {
                    Ok(()) => eprintln!("{} Copied to clipboard", "✓".green()),
                    Err(e) => eprintln!("{}", format!("note: {}", e).yellow()),
                }
            }
        }
        Command::History => {
            let history = open_history(&config);
            if history.entries().is_empty() {
                println!("No prompts saved");
            } else {
                for (i, record) in history.entries().iter().enumerate() {
                    println!(
                        "{} {} {} {}",
                        format!("{:>2}.", i + 1).dimmed(),
                        format!("[{}]", record.category).cyan(),
                        local_time(&record.timestamp),
                        record.timestamp.dimmed()
                    );
                    for line in record.content.lines() {
                        println!("    {}", line);
                    }
                    println!();
                }
            }
        }
        Command::Remove { timestamp } => {
            let mut history = open_history(&config);
            let before = history.entries().len();
            // In-memory removal happens even when the persist fails
            if let Err(e) = history.remove(&timestamp) {
                eprintln!("{}", format!("note: history not persisted: {}", e).yellow());
            }
            if history.entries().len() < before {
                println!("{} Removed entry {}", "✓".green(), timestamp);
            } else {
                println!("No entry with timestamp {}", timestamp);
            }
        }
    }

    Ok(())
}
