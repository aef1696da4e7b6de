use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// A folio invocation pinned to an isolated root, so no config or
/// portfolio document leaks in from the host.
fn folio(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(dir)
        .env("FOLIO_ROOT", dir)
        .env("FOLIO_CONFIG", dir.join("config.toml"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_radar_machine_output_uses_sample_content() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path()).args(["-m", "radar"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], Value::String("ok".to_string()));
    // Sample content has six skills; the polygon closes with a seventh point.
    assert_eq!(json["data"]["vertex_count"], 6);
    assert_eq!(json["data"]["points"].as_array().unwrap().len(), 7);
    assert_eq!(json["data"]["filled"], Value::Bool(true));
}

#[test]
fn test_radar_clamps_out_of_range_proficiency() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("portfolio.toml"),
        r#"
[profile]
name = "T"

[[skills]]
name = "X"
proficiency = 150

[[skills]]
name = "Y"
proficiency = -10

[[skills]]
name = "Z"
proficiency = 50
"#,
    )
    .unwrap();

    let output = folio(dir.path()).args(["-m", "radar"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = json["data"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0]["radius"], 100);
    assert_eq!(points[1]["radius"], 0);
    assert_eq!(points[2]["radius"], 50);
    // Closing point repeats the first vertex.
    assert_eq!(points[3]["radius"], 100);
    assert_eq!(points[3]["angle_degrees"], 0.0);
}

#[test]
fn test_count_machine_emits_all_frames() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path())
        .args(["-m", "count", "Projects", "3", "--duration", "1.5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let frames = json["data"]["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 4);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame["value"], i as u64);
        assert_eq!(frame["label"], "Projects");
    }
    let interval = json["data"]["interval_secs"].as_f64().unwrap();
    assert!((interval - 0.5).abs() < 1e-9);
}

#[test]
fn test_count_rejects_negative_target() {
    let dir = tempdir().unwrap();
    folio(dir.path())
        .args(["count", "Broken", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid counter spec"));
}

#[test]
fn test_count_negative_target_machine_error_envelope() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path())
        .args(["-m", "count", "Broken", "-1"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], Value::Bool(true));
    assert_eq!(json["code"], "invalid_spec");
}

#[test]
fn test_count_zero_target_is_single_frame() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path())
        .args(["-m", "count", "Zero", "0", "--duration", "30"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let frames = json["data"]["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0]["value"], 0);
}

#[test]
fn test_render_plain_contains_sections() {
    let dir = tempdir().unwrap();
    folio(dir.path())
        .args(["--plain", "render", "--no-animate"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("About Me")
                .and(predicate::str::contains("Technical Skills"))
                .and(predicate::str::contains("Projects Portfolio"))
                .and(predicate::str::contains("Contact Me")),
        );
}

#[test]
fn test_render_machine_emits_page_model() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path()).args(["-m", "render"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["data"]["content"]["profile"]["name"].is_string());
    assert_eq!(json["data"]["radar"]["points"].as_array().unwrap().len(), 7);
    assert_eq!(json["data"]["counters"].as_array().unwrap().len(), 3);
}

#[test]
fn test_init_creates_and_refuses_to_clobber() {
    let dir = tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap().to_string();

    folio(dir.path())
        .args(["init", "--dir", &dir_arg])
        .assert()
        .success();
    assert!(dir.path().join("portfolio.toml").is_file());
    assert!(dir.path().join("config.toml").is_file());

    folio(dir.path())
        .args(["init", "--dir", &dir_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    folio(dir.path())
        .args(["init", "--dir", &dir_arg, "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_output_renders_end_to_end() {
    let dir = tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap().to_string();
    folio(dir.path())
        .args(["init", "--dir", &dir_arg])
        .assert()
        .success();

    // The generated document round-trips through the radar pipeline.
    let output = folio(dir.path()).args(["-m", "radar"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["vertex_count"], 6);
}

#[test]
fn test_validate_reports_warnings() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("portfolio.toml"),
        r#"
[profile]
name = "T"

[[skills]]
name = "Python"
proficiency = 90

[[skills]]
name = "Python"
proficiency = 130
"#,
    )
    .unwrap();

    let output = folio(dir.path()).args(["-m", "validate"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["clean"], Value::Bool(false));
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_explicit_missing_content_fails() {
    let dir = tempdir().unwrap();
    folio(dir.path())
        .args(["--content", "missing.toml", "radar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content file not found"));
}
