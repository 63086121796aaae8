//! Integration tests for promptforge
//!
//! Library-level flows against a real temp-dir backend, plus CLI wiring
//! through the `pf` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use promptforge::{
    Category, FieldValues, HistoryStore, JsonFileBackend, PromptRecord, compose,
};

fn config_for(temp: &TempDir) -> std::path::PathBuf {
    let store = temp.path().join("store");
    let config = temp.path().join("config.yml");
    fs::write(&config, format!("store_path: {}\n", store.display())).unwrap();
    config
}

// =============================================================================
// Library flows
// =============================================================================

#[test]
fn test_compose_save_reload_flow() {
    let temp = TempDir::new().unwrap();
    let store_dir = temp.path().join("store");

    let mut values = FieldValues::new();
    values.insert("goal".to_string(), "write a poem".to_string());
    let prompt = compose(Category::Text, &values);

    {
        let backend = JsonFileBackend::open(&store_dir).unwrap();
        let mut history = HistoryStore::open(Box::new(backend));
        history.append(PromptRecord::new(Category::Text, prompt.clone())).unwrap();
    }

    let backend = JsonFileBackend::open(&store_dir).unwrap();
    let history = HistoryStore::open(Box::new(backend));
    assert_eq!(history.entries().len(), 1);
    assert_eq!(history.entries()[0].content, prompt);
    assert_eq!(history.entries()[0].category, Category::Text);
}

#[test]
fn test_cap_survives_reload() {
    let temp = TempDir::new().unwrap();
    let store_dir = temp.path().join("store");

    {
        let backend = JsonFileBackend::open(&store_dir).unwrap();
        let mut history = HistoryStore::open(Box::new(backend));
        for n in 0..11 {
            history
                .append(PromptRecord::new(Category::Code, format!("prompt {}", n)))
                .unwrap();
        }
    }

    let backend = JsonFileBackend::open(&store_dir).unwrap();
    let history = HistoryStore::open(Box::new(backend));
    assert_eq!(history.entries().len(), promptforge::HISTORY_CAP);
    assert_eq!(history.entries()[0].content, "prompt 10");
    assert!(history.entries().iter().all(|r| r.content != "prompt 0"));
}

#[test]
fn test_corrupt_history_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store_dir = temp.path().join("store");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("history.json"), "{ not json").unwrap();

    let backend = JsonFileBackend::open(&store_dir).unwrap();
    let mut history = HistoryStore::open(Box::new(backend));
    assert!(history.entries().is_empty());

    // The store stays usable and overwrites the bad blob on next append
    history.append(PromptRecord::new(Category::Audio, "fresh")).unwrap();
    let reloaded = HistoryStore::open(Box::new(JsonFileBackend::open(&store_dir).unwrap()));
    assert_eq!(reloaded.entries().len(), 1);
}

// =============================================================================
// CLI wiring
// =============================================================================

#[test]
fn test_cli_fields_lists_hints() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "fields", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goal"))
        .stdout(predicate::str::contains("instructions"));
}

#[test]
fn test_cli_template_prints_placeholders() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "template", "image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{{subject}}"));
}

#[test]
fn test_cli_compose_substitutes_and_marks_missing() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "compose",
            "text",
            "-f",
            "goal=write a poem",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal: write a poem"))
        .stdout(predicate::str::contains("Tone: [NOT SPECIFIED]"));
}

#[test]
fn test_cli_compose_save_then_history_then_remove() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "compose",
            "code",
            "-f",
            "language=rust",
            "--save",
        ])
        .assert()
        .success();

    Command::cargo_bin("pf")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[code]"))
        .stdout(predicate::str::contains("Language: rust"));

    // Pull the identity key straight from the persisted blob
    let blob = fs::read_to_string(temp.path().join("store").join("history.json")).unwrap();
    let records: Vec<PromptRecord> = serde_json::from_str(&blob).unwrap();
    assert_eq!(records.len(), 1);

    Command::cargo_bin("pf")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "remove",
            &records[0].timestamp,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    Command::cargo_bin("pf")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts saved"));
}

#[test]
fn test_cli_remove_missing_timestamp_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "remove",
            "2020-01-01T00:00:00.000000Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_cli_remove_with_unusable_store_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    // A file where the store directory should be makes the backend unopenable
    let store = temp.path().join("store");
    fs::write(&store, "not a directory").unwrap();
    let config = temp.path().join("config.yml");
    fs::write(&config, format!("store_path: {}\n", store.display())).unwrap();

    Command::cargo_bin("pf")
        .unwrap()
        .args([
            "--config",
            config.to_str().unwrap(),
            "remove",
            "2020-01-01T00:00:00.000000Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_cli_rejects_unknown_category() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);

    Command::cargo_bin("pf")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "compose", "video"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("video"));
}
