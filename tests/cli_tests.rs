//! End-to-end tests for the `touchdeck` CLI.

mod fixtures;
use fixtures::{keypad_manifest_file, write_manifest, write_script, KEYPAD_MANIFEST};

use std::process::Command;

/// Path to the touchdeck binary
fn touchdeck_bin() -> &'static str {
    env!("CARGO_BIN_EXE_touchdeck")
}

#[test]
fn test_validate_valid_manifest() {
    let (path, _dir) = keypad_manifest_file();

    let output = Command::new(touchdeck_bin())
        .args(["validate", "--manifest", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid manifest should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓") && stdout.contains("2 screens"),
        "Output should indicate success: {stdout}"
    );
}

#[test]
fn test_validate_valid_manifest_json() {
    let (path, _dir) = keypad_manifest_file();

    let output = Command::new(touchdeck_bin())
        .args(["validate", "--manifest", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
    assert_eq!(result["checks"]["images"], "passed");
    assert_eq!(result["checks"]["geometry"], "passed");
}

#[test]
fn test_validate_broken_manifest_fails() {
    let broken = KEYPAD_MANIFEST.replace("SCREEN_FILE_LENGTH(256000)", "SCREEN_FILE_LENGTH(1)");
    let (path, _dir) = write_manifest(&broken);

    let output = Command::new(touchdeck_bin())
        .args(["validate", "--manifest", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "Validation failure should exit 1");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["file_length"], "failed");
}

#[test]
fn test_validate_missing_file_errors() {
    let output = Command::new(touchdeck_bin())
        .args(["validate", "--manifest", "/nonexistent/missing.screens"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_inspect_json() {
    let (path, _dir) = keypad_manifest_file();

    let output = Command::new(touchdeck_bin())
        .args(["inspect", "--manifest", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");

    let screens = result["screens"].as_array().unwrap();
    assert_eq!(screens.len(), 2);
    assert_eq!(screens[0]["name"], "KeypadUp");
    assert_eq!(screens[0]["hotspots"], 12);
    assert_eq!(screens[0]["depth"], "Color16bpp");
    assert_eq!(result["groups"][0]["name"], "Digit");
    assert_eq!(result["groups"][0]["members"], 24);
    assert_eq!(result["file_length"], 256_000);
}

#[test]
fn test_inspect_text_lists_hotspots() {
    let (path, _dir) = keypad_manifest_file();

    let output = Command::new(touchdeck_bin())
        .args(["inspect", "--manifest", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Screen KeypadUp"));
    assert!(stdout.contains("hotspot Key_7 [Digit]"));
    assert!(stdout.contains("Screen file length: 256000 bytes"));
}

#[test]
fn test_simulate_keypad_script() {
    let (path, dir) = keypad_manifest_file();
    let script = write_script(
        &dir,
        "# keypad smoke script\n\
         tap 30 30\n\
         tap 250 30\n\
         navigate KeypadDown\n\
         tap 30 80\n\
         navigate Nowhere\n",
    );

    let output = Command::new(touchdeck_bin())
        .args([
            "simulate",
            "--manifest",
            path.to_str().unwrap(),
            "--script",
            script.to_str().unwrap(),
            "--start",
            "KeypadUp",
            "--keypad",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(">> enter screen KeypadUp"));
    assert!(stdout.contains("tap (30, 30) -> Key_7 [Digit] on KeypadUp"));
    assert!(stdout.contains(">> refresh KeypadUp/Display = \"7\""));
    assert!(stdout.contains("tap (250, 30) -> no hotspot"));
    assert!(stdout.contains(">> enter screen KeypadDown"));
    assert!(stdout.contains("tap (30, 80) -> Key_7 [Digit] on KeypadDown"));
    assert!(stdout.contains(">> refresh KeypadDown/Display = \"77\""));
    assert!(stdout.contains("navigate Nowhere -> error"));
}

#[test]
fn test_simulate_requires_start_screen() {
    let (path, dir) = keypad_manifest_file();
    let script = write_script(&dir, "tap 30 30\n");

    let output = Command::new(touchdeck_bin())
        .args([
            "simulate",
            "--manifest",
            path.to_str().unwrap(),
            "--script",
            script.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no start screen"), "stderr: {stderr}");
}
