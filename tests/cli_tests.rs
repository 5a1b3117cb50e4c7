//! CLI Integration Tests
//!
//! Runs the compiled server binary for the paths that exit before binding a
//! socket: help, version and startup failures.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run investigator-server in an isolated working directory with no API keys
fn run_server(args: &[&str], dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_investigator-server"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("PINECONE_API_KEY")
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("INVESTIGATOR_CONFIG")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute investigator-server")
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_server(&["--help"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Answers questions about case documents"));
    assert!(stdout.contains("PINECONE_API_KEY"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
    assert!(stdout.contains("--no-color"));
}

#[test]
fn test_short_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_server(&["-h"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Crime-investigator RAG chat server"));
    assert!(!stdout.contains("Answers questions about case documents"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_server(&["--version"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_api_key_aborts_startup() {
    let dir = TempDir::new().unwrap();
    let output = run_server(&["--no-color"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PINECONE_API_KEY"), "stderr: {}", stderr);
}

#[test]
fn test_missing_explicit_config_aborts_startup() {
    let dir = TempDir::new().unwrap();
    let output = run_server(&["--no-color", "--config", "nowhere.toml"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nowhere.toml"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_aborts_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("investigator.toml"),
        "[llm]\ntemperature = 5.0\n",
    )
    .unwrap();

    let output = run_server(&["--no-color"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("llm.temperature"), "stderr: {}", stderr);
}

#[test]
fn test_config_source_is_logged() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("investigator.toml"), "[server]\nport = 5050\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_investigator-server"))
        .arg("--no-color")
        .current_dir(dir.path())
        .env_remove("PINECONE_API_KEY")
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("INVESTIGATOR_CONFIG")
        .env("RUST_LOG", "investigator_server=info")
        .output()
        .expect("Failed to execute investigator-server");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded configuration"), "stdout: {}", stdout);
    assert!(stdout.contains("investigator.toml"), "stdout: {}", stdout);
}
