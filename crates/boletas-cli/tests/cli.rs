use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with the config directory pointed at `home`.
fn boletas(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("boletas").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("text"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""sheet_name": "Boletas""#))
        .stdout(predicate::str::contains(r#""layout": "zofingen""#));
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .args(["config", "set", "export.delimiter", ","])
        .assert()
        .success();

    boletas(home.path())
        .args(["config", "get", "export.delimiter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"",""#));
}

#[test]
fn test_config_follows_config_flag() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("custom.json");

    boletas(home.path())
        .args(["--config", file.to_str().unwrap(), "config", "set", "export.sheet_name", "Hojas"])
        .assert()
        .success();

    let saved = fs::read_to_string(&file).unwrap();
    assert!(saved.contains(r#""sheet_name": "Hojas""#));
    assert!(!home.path().join(".config/boletas/config.json").exists());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .args(["config", "set", "export.nope", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_batch_directory_writes_error_row() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = work.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("print-BOL 1234567890.pdf"), b"not a pdf").unwrap();

    boletas(home.path())
        .current_dir(work.path())
        .args(["batch", "in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"));

    let csv = fs::read_to_string(work.path().join("boletas.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Check number;Due date;"));
    assert_eq!(lines[1], ";;;;(error) print-BOL 1234567890.pdf;;;;;");
}

#[test]
fn test_batch_xlsx_only() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("print-BOL 1234567890.pdf"), b"not a pdf").unwrap();

    boletas(home.path())
        .current_dir(work.path())
        .args(["batch", ".", "--xlsx", "out.xlsx"])
        .assert()
        .success();

    let data = fs::read(work.path().join("out.xlsx")).unwrap();
    assert!(data.starts_with(b"PK"));
    assert!(!work.path().join("boletas.csv").exists());
}

#[test]
fn test_batch_without_matches_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    boletas(home.path())
        .current_dir(work.path())
        .args(["batch", "*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_process_missing_file_fails() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .args(["process", "/nonexistent/print-BOL 0000000000.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_unknown_layout_rejected() {
    let home = TempDir::new().unwrap();
    boletas(home.path())
        .args(["batch", "*.pdf", "--layout", "galicia"])
        .assert()
        .failure();
}
