use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn media_tool(config_dir: &TempDir, config: &str) -> Command {
    let config_path = config_dir.path().join("config.toml");
    fs::write(&config_path, config).unwrap();

    let mut cmd = Command::cargo_bin("media-tool").unwrap();
    cmd.env("APP_CONFIG_PATH", &config_path).env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_duration_plain() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "")
        .args(["duration", "5999942"])
        .assert()
        .success()
        .stdout("69 days\n");
}

#[test]
fn test_negative_duration_exits_with_error() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "")
        .args(["duration", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn test_negative_duration_json_error() {
    let dir = TempDir::new().unwrap();
    let output = media_tool(&dir, "")
        .args(["--json", "duration", "-10"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("-10"));
}

#[test]
fn test_hash_name_respects_config() {
    let dir = TempDir::new().unwrap();
    let output = media_tool(&dir, "[naming]\nalgorithm = \"sha1\"\nhash_len = 12\n")
        .args(["hash-name", "foo bar baz.mp3", "README"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 12 + 4);
    assert!(lines[0].ends_with(".mp3"));
    assert_eq!(lines[1].len(), 12);
    assert!(!lines[1].contains('.'));
}

#[test]
fn test_hash_name_json() {
    let dir = TempDir::new().unwrap();
    let output = media_tool(&dir, "")
        .args(["hash-name", "take.wav", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"][0]["original"], "take.wav");
    let hashed = value["data"][0]["hashed"].as_str().unwrap();
    assert_eq!(hashed.len(), 64 + 4);
}

#[test]
fn test_track_hash() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "")
        .args(["track-hash", "Night Drive", "--user-id", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$").unwrap());
}

#[test]
fn test_slug() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "")
        .args(["slug", "12", "Hello, Wörld!"])
        .assert()
        .success()
        .stdout("12-hello-world\n");
}

#[test]
fn test_check_audio() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "")
        .args(["check-audio", "a.mp3", "b.OGG"])
        .assert()
        .success()
        .stdout("a.mp3: ok\nb.OGG: ok\n");

    media_tool(&dir, "[audio]\nallowed_extensions = [\"opus\"]\n")
        .args(["check-audio", "a.mp3", "b.opus"])
        .assert()
        .failure()
        .stdout("a.mp3: rejected\nb.opus: ok\n");
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    media_tool(&dir, "[naming]\nhash_len = 2\n")
        .args(["duration", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash_len"));
}

#[test]
fn test_invalid_config_json_error() {
    let dir = TempDir::new().unwrap();
    let output = media_tool(&dir, "[naming]\nhash_len = 2\n")
        .args(["--json", "duration", "5"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("hash_len"));
}
