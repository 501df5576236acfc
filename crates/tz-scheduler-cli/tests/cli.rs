use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
[scheduling]
reference_timezone = "UTC"
horizon_days = 5
max_suggestions = 10

[[users]]
username = "ursula"
name = "Ursula"
timezone = "UTC"

[[users]]
username = "nate"
name = "Nate"
timezone = "America/New_York"

[[users]]
username = "budi"
timezone = "Asia/Jakarta"

[[users]]
username = "ghost"
"#;

// Monday.
const NOW: &str = "2026-01-12T06:00:00Z";

fn config_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(CONFIG.as_bytes()).unwrap();
    f
}

fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn check(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("check").arg("--config").arg(config.path());
    cmd
}

#[test]
fn check_compliant_window() {
    let cfg = config_file();
    let json = run_json(check(&cfg).args([
        "--creator",
        "ursula",
        "--participant",
        "budi",
        "--start",
        "2026-01-14T09:00:00Z",
        "--end",
        "2026-01-14T10:00:00Z",
        "--now",
        NOW,
    ]));
    assert_eq!(json, serde_json::json!({"valid": true}));
}

#[test]
fn check_reports_conflicts_and_suggestions() {
    let cfg = config_file();
    let json = run_json(check(&cfg).args([
        "--creator",
        "ursula",
        "--participant",
        "nate",
        "--start",
        "2026-01-14T09:00:00Z",
        "--end",
        "2026-01-14T10:00:00Z",
        "--now",
        NOW,
    ]));
    assert_eq!(json["valid"], false);
    let conflicts = json["conflicts"].as_array().unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0]["participant"], "Nate");
    assert_eq!(conflicts[0]["timezone"], "America/New_York");
    assert_eq!(conflicts[0]["local_start"], "04:00");
    assert_eq!(conflicts[0]["local_end"], "05:00");
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 10);
    assert_eq!(suggestions[0]["start"], "2026-01-12T13:00:00Z");
    assert_eq!(suggestions[0]["end"], "2026-01-12T14:00:00Z");
}

#[test]
fn check_rejects_unknown_users() {
    let cfg = config_file();
    check(&cfg)
        .args([
            "--creator",
            "ursula",
            "--participant",
            "zed",
            "--participant",
            "yan",
            "--start",
            "2026-01-14T09:00:00Z",
            "--end",
            "2026-01-14T10:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid usernames: zed, yan"));
}

#[test]
fn check_rejects_reversed_window() {
    let cfg = config_file();
    check(&cfg)
        .args([
            "--creator",
            "ursula",
            "--start",
            "2026-01-14T10:00:00Z",
            "--end",
            "2026-01-14T09:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid window"));
}

#[test]
fn suggest_lists_slots() {
    let cfg = config_file();
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("suggest").arg("--config").arg(cfg.path());
    let json = run_json(cmd.args([
        "--creator",
        "nate",
        "--participant",
        "ursula",
        "--duration",
        "30",
        "--now",
        NOW,
    ]));
    let slots = json.as_array().unwrap();
    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0]["start"], "2026-01-12T13:00:00Z");
    assert_eq!(slots[0]["end"], "2026-01-12T13:30:00Z");
}

#[test]
fn suggest_rejects_zero_duration() {
    let cfg = config_file();
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("suggest")
        .arg("--config")
        .arg(cfg.path())
        .args(["--creator", "ursula", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn suggest_rejects_overflowing_duration() {
    let cfg = config_file();
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("suggest")
        .arg("--config")
        .arg(cfg.path())
        .args(["--creator", "ursula", "--duration", "9223372036854775807", "--now", NOW])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn oversized_horizon_in_config_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"[scheduling]\nhorizon_days = 4294967295\n\n[[users]]\nusername = \"ursula\"\n")
        .unwrap();
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("suggest")
        .arg("--config")
        .arg(f.path())
        .args(["--creator", "ursula", "--now", NOW])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid horizon"));
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("tzsched")
        .unwrap()
        .args([
            "suggest",
            "--config",
            "/nonexistent/tzsched.toml",
            "--creator",
            "ursula",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read /nonexistent/tzsched.toml"));
}

#[test]
fn bad_now_is_reported() {
    let cfg = config_file();
    let mut cmd = Command::cargo_bin("tzsched").unwrap();
    cmd.arg("suggest")
        .arg("--config")
        .arg(cfg.path())
        .args(["--creator", "ursula", "--now", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--now"));
}
