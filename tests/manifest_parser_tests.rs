//! Integration tests for manifest parsing and load-time validation.

mod fixtures;
use fixtures::{keypad_manifest_file, KEYPAD_MANIFEST};

use touchdeck::models::{
    validate, ColorDepth, OverlapPolicy, Rect, Rgb, Value, ValidationErrorKind,
};
use touchdeck::parser::{parse_manifest, parse_manifest_str};

#[test]
fn test_keypad_manifest_parses_completely() {
    let set = parse_manifest_str(KEYPAD_MANIFEST).unwrap();

    assert_eq!(set.screens.len(), 2);
    assert_eq!(set.file_length, Some(256_000));

    let up = set.screen_by_name("KeypadUp").unwrap();
    assert_eq!(up.image.address, 0);
    assert_eq!(up.image.size, 128_000);
    assert_eq!(up.image.width, 200);
    assert_eq!(up.image.height, 320);
    assert_eq!(up.image.stride, 200);
    assert_eq!(up.image.depth, ColorDepth::Color16bpp);
    assert_eq!(up.hotspots.len(), 12);
    assert_eq!(up.areas.len(), 1);
    assert_eq!(up.locations.len(), 1);

    let down = set.screen_by_name("KeypadDown").unwrap();
    assert_eq!(down.image.address, 128_000);
    assert_eq!(down.hotspots.len(), 12);

    // Same id, screen-specific geometry
    assert_eq!(up.hotspot("Key_7").unwrap().rect, Rect::new(0, 0, 59, 59));
    assert_eq!(
        down.hotspot("Key_7").unwrap().rect,
        Rect::new(0, 50, 59, 109)
    );
}

#[test]
fn test_keypad_manifest_groups_and_tables() {
    let set = parse_manifest_str(KEYPAD_MANIFEST).unwrap();

    // One group spanning both screens
    assert_eq!(set.groups.len(), 1);
    let digit = set.group("Digit").unwrap();
    assert_eq!(digit.len(), 24);
    assert!(digit
        .members
        .iter()
        .any(|m| m.screen == "KeypadDown" && m.hotspot == "Key_decimal"));

    assert_eq!(set.colors.len(), 1);
    assert_eq!(
        set.color("DisplayBackcolor").unwrap().color,
        Rgb::new(255, 255, 0)
    );

    assert_eq!(set.value_def("Brightness").unwrap().default, Value::Int(80));
    assert_eq!(
        set.value_def("Display").unwrap().default,
        Value::Str(String::new())
    );
}

#[test]
fn test_keypad_manifest_validates_clean() {
    let set = parse_manifest_str(KEYPAD_MANIFEST).unwrap();
    let report = validate(&set, OverlapPolicy::DeclarationOrder);
    assert!(report.is_valid(), "{}", report.format_message());
    assert!(report.warnings.is_empty(), "{}", report.format_message());
}

#[test]
fn test_parse_from_file() {
    let (path, _dir) = keypad_manifest_file();
    let set = parse_manifest(&path).unwrap();
    assert_eq!(set.screens.len(), 2);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = parse_manifest(std::path::Path::new("/nonexistent/x.screens")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_hotspot_count_mismatch_rejected() {
    let content = KEYPAD_MANIFEST.replace("HOTSPOT_COUNT(KeypadUp, 12)", "HOTSPOT_COUNT(KeypadUp, 11)");
    let err = parse_manifest_str(&content).unwrap_err();
    assert!(format!("{err:#}").contains("declares 11 hotspots"));
}

#[test]
fn test_bad_stride_fails_validation() {
    let content = KEYPAD_MANIFEST.replace("\tIMAGE_STRIDE(200)", "\tIMAGE_STRIDE(100)");
    let set = parse_manifest_str(&content).unwrap();
    let report = validate(&set, OverlapPolicy::DeclarationOrder);
    assert!(!report.is_valid());
    assert!(report
        .errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::ImageLayout));
    // Both screens carry the broken stride
    assert!(report.errors.len() >= 2);
}

#[test]
fn test_duplicate_hotspot_fails_validation() {
    let content = KEYPAD_MANIFEST.replace(
        "DEFINE_HOTSPOT(Key_8, Digit, 70, 0, 129, 59)",
        "DEFINE_HOTSPOT(Key_7, Digit, 70, 0, 129, 59)",
    );
    let set = parse_manifest_str(&content).unwrap();
    let report = validate(&set, OverlapPolicy::DeclarationOrder);
    assert!(report
        .errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::DuplicateHotspot
            && e.screen.as_deref() == Some("KeypadUp")));
}

#[test]
fn test_file_length_mismatch_fails_validation() {
    let content = KEYPAD_MANIFEST.replace("SCREEN_FILE_LENGTH(256000)", "SCREEN_FILE_LENGTH(128000)");
    let set = parse_manifest_str(&content).unwrap();
    let report = validate(&set, OverlapPolicy::DeclarationOrder);
    assert!(report
        .errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::FileLengthMismatch));
}

#[test]
fn test_out_of_bounds_hotspot_fails_validation() {
    let content = KEYPAD_MANIFEST.replace(
        "DEFINE_HOTSPOT(Key_9, Digit, 140, 0, 199, 59)",
        "DEFINE_HOTSPOT(Key_9, Digit, 140, 0, 220, 59)",
    );
    let set = parse_manifest_str(&content).unwrap();
    let report = validate(&set, OverlapPolicy::DeclarationOrder);
    assert!(report
        .errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::OutOfBounds));
}
