//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every helper is used by every test binary

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The two-screen keypad sample manifest (up/down split layout).
pub const KEYPAD_MANIFEST: &str = include_str!("keypad.screens");

/// A minimal single-screen manifest with two deliberately overlapping
/// hotspots, for tie-break tests.
pub const OVERLAP_MANIFEST: &str = r"
START_SCREEN(Main)
	IMAGE_ADDRESS(0)
	IMAGE_SIZE(128000)
	IMAGE_WIDTH(200)
	IMAGE_HEIGHT(320)
	IMAGE_STRIDE(200)
	IMAGE_DEPTH(Color16bpp)
END_SCREEN(Main)

START_HOTSPOTS(Main)
	DEFINE_HOTSPOT(First, Digit, 0, 0, 99, 99)
	DEFINE_HOTSPOT(Second, Digit, 50, 50, 149, 149)
END_HOTSPOTS(Main)

HOTSPOT_COUNT(Main, 2)

SCREEN_FILE_LENGTH(128000)
";

/// Writes manifest content to a temporary file.
///
/// Returns the file path and the `TempDir` guard keeping it alive.
pub fn write_manifest(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("manifest.screens");
    fs::write(&path, content).expect("Failed to write manifest");
    (path, dir)
}

/// Writes a simulation script to a temporary file.
pub fn write_script(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("script.txt");
    fs::write(&path, content).expect("Failed to write script");
    path
}

/// The keypad manifest written to a temporary file.
pub fn keypad_manifest_file() -> (PathBuf, TempDir) {
    write_manifest(KEYPAD_MANIFEST)
}
