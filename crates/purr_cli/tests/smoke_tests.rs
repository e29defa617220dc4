//! CLI smoke tests — run the real binary against a temp state file.

use std::path::Path;
use std::process::Command;

fn purr_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_purr"))
}

fn purr_with_state(state_file: &Path) -> Command {
    let mut cmd = purr_bin();
    cmd.arg("--state-file").arg(state_file);
    cmd
}

#[test]
fn test_help_flag() {
    let output = purr_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage"),
        "Expected usage info in --help output"
    );
    assert!(stdout.contains("status"));
    assert!(stdout.contains("feed"));
    assert!(stdout.contains("play"));
    assert!(stdout.contains("rename"));
}

#[test]
fn test_version_flag() {
    let output = purr_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("purr"),
        "Expected binary name in --version output"
    );
}

#[test]
fn test_status_creates_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let output = purr_with_state(&state_file)
        .arg("status")
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hunger:"), "status should render bars");
    assert!(stdout.contains("Happiness:"));
    assert!(stdout.contains("Purr"), "default pet is named Purr");

    // status persists the record (it must save the decay it applied)
    assert!(state_file.exists());
    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state_file).unwrap()).unwrap();
    assert_eq!(record["name"], "Purr");
    assert!(record["hunger"].is_number());
    assert!(record["happiness"].is_number());
    assert!(record["last_update"].is_number());
}

#[test]
fn test_feed_then_status_reflects_meal() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let output = purr_with_state(&state_file)
        .arg("feed")
        .arg("tuna")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tuna"), "feed should echo the item");

    // Fresh pet starts at hunger 50; one meal brings it to 25.
    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state_file).unwrap()).unwrap();
    assert!((record["hunger"].as_f64().unwrap() - 25.0).abs() < 0.5);
    assert!((record["happiness"].as_f64().unwrap() - 55.0).abs() < 0.5);
}

#[test]
fn test_rename_persists() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    let output = purr_with_state(&state_file)
        .arg("rename")
        .arg("Mochi")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Purr"), "rename announces the old name");
    assert!(stdout.contains("Mochi"));

    let output = purr_with_state(&state_file)
        .arg("status")
        .output()
        .expect("failed to run");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mochi"), "status should show the new name");
}

#[test]
fn test_play_caps_happiness() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");

    // Three play sessions from the 50.0 default: 80 → 100 → 100.
    for _ in 0..3 {
        let output = purr_with_state(&state_file)
            .arg("play")
            .output()
            .expect("failed to run");
        assert!(output.status.success());
    }

    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&state_file).unwrap()).unwrap();
    assert!(record["happiness"].as_f64().unwrap() <= 100.0);
    assert!(record["hunger"].as_f64().unwrap() <= 100.0);
}

#[test]
fn test_malformed_state_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("state.json");
    std::fs::write(&state_file, "{ not json").unwrap();

    let output = purr_with_state(&state_file)
        .arg("status")
        .output()
        .expect("failed to run");
    assert!(!output.status.success(), "malformed state should be an error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("state"),
        "error should mention the state file, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_config_does_not_panic() {
    // A nonexistent config file falls back to defaults
    let dir = tempfile::tempdir().unwrap();
    let output = purr_with_state(&dir.path().join("state.json"))
        .arg("--config")
        .arg("/tmp/nonexistent_purr_config_12345.toml")
        .arg("status")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
}
