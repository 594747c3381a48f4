//! Smoke tests for the fynd binary.

use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_fynd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fynd"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute fynd")
}

#[test]
fn test_age_command() {
    let output = run_fynd(&["age", "15/6/2000", "--today", "14/6/2025"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "24");

    let output = run_fynd(&["age", "not-a-date", "--today", "1/1/2025"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim_end().ends_with('0'));
}

#[test]
fn test_feed_command_lists_matches() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.json");
    std::fs::write(
        &seed,
        r#"{"users": {
            "A": {"name": "Arjun", "gender": "Male", "language": "Hindi", "interests": ["music"]},
            "B": {"name": "Bina", "gender": "Female", "language": "Hindi", "interests": ["music"]},
            "C": {"name": "Chitra", "gender": "Female", "language": "Tamil"}
        }}"#,
    )
    .unwrap();
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[ranking]\njitter_max = 0\n").unwrap();

    let output = run_fynd(&[
        "--config",
        config.to_str().unwrap(),
        "feed",
        "--seed",
        seed.to_str().unwrap(),
        "--user",
        "A",
        "--swipes",
        "1",
    ]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bina"));
    assert!(!stdout.contains("Chitra"));
    assert!(stdout.contains("swiped Right on B"));
    assert!(stdout.contains("No more profiles"));
}

#[test]
fn test_config_command_prints_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("missing.toml");
    let output = run_fynd(&["--config", config.to_str().unwrap(), "config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("commit_threshold = 100.0"));
    assert!(stdout.contains("window_ms = 2000"));
}
