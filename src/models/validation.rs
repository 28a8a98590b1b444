//! Load-time validation of a parsed resource set.
//!
//! Every structural fault a manifest can carry is collected here into a
//! single report before the engine starts. A report with errors is fatal at
//! startup; runtime operations never re-validate.

use super::resource_set::ResourceSet;
use super::screen::Screen;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Policy for hotspots whose rectangles overlap on one screen.
///
/// Manifests are expected to declare non-overlapping hotspots, but the hit
/// test must still be deterministic when they don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// First hotspot in declaration order wins; overlaps are reported as
    /// warnings.
    #[default]
    DeclarationOrder,
    /// Overlapping hotspots are a load-time configuration error.
    Reject,
}

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Image stride/size/width arithmetic does not hold
    ImageLayout,
    /// Two screens share a name
    DuplicateScreen,
    /// Two hotspots on one screen share an id
    DuplicateHotspot,
    /// Two areas on one screen share an id
    DuplicateArea,
    /// Two locations on one screen share an id
    DuplicateLocation,
    /// Two value declarations share a name
    DuplicateValue,
    /// Two colors share a name
    DuplicateColor,
    /// A hotspot rectangle has inverted corners
    MalformedRect,
    /// A hotspot, area, or location lies outside its screen's image bounds
    OutOfBounds,
    /// Two hotspots on one screen overlap
    HotspotOverlap,
    /// Declared screen file length does not match the image sizes
    FileLengthMismatch,
}

/// A single validation finding with screen context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Finding category
    pub kind: ValidationErrorKind,
    /// Screen the finding applies to, if any
    pub screen: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Creates a new finding without screen context.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            screen: None,
            message: message.into(),
        }
    }

    /// Attaches screen context.
    #[must_use]
    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.screen {
            Some(screen) => write!(f, "[{screen}] {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Validation result: fatal errors plus non-fatal warnings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Errors that prevent the engine from starting
    pub errors: Vec<ValidationError>,
    /// Findings worth surfacing but not fatal
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the report as a user-facing message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validates a resource set against the structural invariants.
///
/// Checks, per screen: image layout arithmetic, unique hotspot/area/location
/// ids, normalized rectangles, in-bounds geometry, and hotspot overlaps per
/// the configured policy. Globally: unique screen/value/color names and the
/// screen-file length cross-check.
#[must_use]
pub fn validate(resources: &ResourceSet, overlap: OverlapPolicy) -> ValidationReport {
    let mut report = ValidationReport::new();

    check_unique_screen_names(resources, &mut report);

    for screen in &resources.screens {
        check_image_layout(screen, &mut report);
        check_screen_geometry(screen, &mut report);
        check_hotspot_overlaps(screen, overlap, &mut report);
    }

    check_unique_names(
        resources.values.iter().map(|v| v.name.as_str()),
        ValidationErrorKind::DuplicateValue,
        "value",
        &mut report,
    );
    check_unique_names(
        resources.colors.iter().map(|c| c.name.as_str()),
        ValidationErrorKind::DuplicateColor,
        "color",
        &mut report,
    );

    check_file_length(resources, &mut report);

    report
}

fn check_unique_screen_names(resources: &ResourceSet, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for screen in &resources.screens {
        if !seen.insert(screen.name.as_str()) {
            report.errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateScreen,
                format!("duplicate screen name '{}'", screen.name),
            ));
        }
    }
}

fn check_image_layout(screen: &Screen, report: &mut ValidationReport) {
    if let Some(message) = screen.image.layout_error() {
        report.errors.push(
            ValidationError::new(ValidationErrorKind::ImageLayout, message)
                .with_screen(&screen.name),
        );
    }
}

fn check_screen_geometry(screen: &Screen, report: &mut ValidationReport) {
    let mut hotspot_ids = HashSet::new();
    for hotspot in &screen.hotspots {
        if !hotspot_ids.insert(hotspot.id.as_str()) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateHotspot,
                    format!("duplicate hotspot id '{}'", hotspot.id),
                )
                .with_screen(&screen.name),
            );
        }

        if !hotspot.rect.is_normalized() {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::MalformedRect,
                    format!("hotspot '{}' has inverted corners {}", hotspot.id, hotspot.rect),
                )
                .with_screen(&screen.name),
            );
            continue;
        }

        let rect = hotspot.rect;
        if !screen.in_bounds(rect.x0, rect.y0) || !screen.in_bounds(rect.x1, rect.y1) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::OutOfBounds,
                    format!(
                        "hotspot '{}' {} exceeds image bounds {}x{}",
                        hotspot.id, rect, screen.image.width, screen.image.height
                    ),
                )
                .with_screen(&screen.name),
            );
        }
    }

    let mut area_ids = HashSet::new();
    for area in &screen.areas {
        if !area_ids.insert(area.id.as_str()) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateArea,
                    format!("duplicate area id '{}'", area.id),
                )
                .with_screen(&screen.name),
            );
        }

        if !area.rect.is_normalized() {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::MalformedRect,
                    format!("area '{}' has an empty or inverted rectangle", area.id),
                )
                .with_screen(&screen.name),
            );
            continue;
        }

        let rect = area.rect;
        if !screen.in_bounds(rect.x0, rect.y0) || !screen.in_bounds(rect.x1, rect.y1) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::OutOfBounds,
                    format!(
                        "area '{}' {} exceeds image bounds {}x{}",
                        area.id, rect, screen.image.width, screen.image.height
                    ),
                )
                .with_screen(&screen.name),
            );
        }
    }

    let mut location_ids = HashSet::new();
    for location in &screen.locations {
        if !location_ids.insert(location.id.as_str()) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateLocation,
                    format!("duplicate location id '{}'", location.id),
                )
                .with_screen(&screen.name),
            );
        }

        if !screen.in_bounds(location.x, location.y) {
            report.errors.push(
                ValidationError::new(
                    ValidationErrorKind::OutOfBounds,
                    format!(
                        "location '{}' ({}, {}) exceeds image bounds {}x{}",
                        location.id, location.x, location.y, screen.image.width, screen.image.height
                    ),
                )
                .with_screen(&screen.name),
            );
        }
    }
}

fn check_hotspot_overlaps(screen: &Screen, overlap: OverlapPolicy, report: &mut ValidationReport) {
    for (idx, a) in screen.hotspots.iter().enumerate() {
        for b in &screen.hotspots[idx + 1..] {
            if !a.rect.intersects(&b.rect) {
                continue;
            }
            let finding = ValidationError::new(
                ValidationErrorKind::HotspotOverlap,
                format!(
                    "hotspots '{}' {} and '{}' {} overlap; '{}' wins by declaration order",
                    a.id, a.rect, b.id, b.rect, a.id
                ),
            )
            .with_screen(&screen.name);

            match overlap {
                OverlapPolicy::DeclarationOrder => report.warnings.push(finding),
                OverlapPolicy::Reject => report.errors.push(finding),
            }
        }
    }
}

fn check_unique_names<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: ValidationErrorKind,
    what: &str,
    report: &mut ValidationReport,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            report.errors.push(ValidationError::new(
                kind,
                format!("duplicate {what} name '{name}'"),
            ));
        }
    }
}

fn check_file_length(resources: &ResourceSet, report: &mut ValidationReport) {
    if let Some(declared) = resources.file_length {
        let actual = resources.total_image_size();
        if u64::from(declared) != actual {
            report.errors.push(ValidationError::new(
                ValidationErrorKind::FileLengthMismatch,
                format!(
                    "declared screen file length {declared} does not match total image size {actual}"
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::area::{Area, Location};
    use crate::models::geometry::Rect;
    use crate::models::hotspot::Hotspot;
    use crate::models::image::{ColorDepth, ImageInfo};
    use crate::models::value::{Value, ValueDef};

    fn image() -> ImageInfo {
        ImageInfo {
            address: 0,
            size: 128_000,
            width: 200,
            height: 320,
            stride: 200,
            depth: ColorDepth::Color16bpp,
        }
    }

    fn valid_screen() -> Screen {
        let mut screen = Screen::new("KeypadUp", image());
        screen
            .hotspots
            .push(Hotspot::new("Key_7", "Digit", Rect::new(0, 0, 59, 59)));
        screen
            .hotspots
            .push(Hotspot::new("Key_8", "Digit", Rect::new(70, 0, 129, 59)));
        screen.areas.push(Area::new("Display", 5, 275, 190, 40));
        screen.locations.push(Location::new("Status", 100, 310));
        screen
    }

    fn build(screens: Vec<Screen>) -> ResourceSet {
        let total: u32 = screens.iter().map(|s| s.image.size).sum();
        ResourceSet::build(screens, Vec::new(), Vec::new(), Some(total))
    }

    #[test]
    fn test_valid_set_passes() {
        let report = validate(&build(vec![valid_screen()]), OverlapPolicy::DeclarationOrder);
        assert!(report.is_valid(), "{}", report.format_message());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_hotspot_id() {
        let mut screen = valid_screen();
        screen
            .hotspots
            .push(Hotspot::new("Key_7", "Digit", Rect::new(140, 0, 199, 59)));

        let report = validate(&build(vec![screen]), OverlapPolicy::DeclarationOrder);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].kind, ValidationErrorKind::DuplicateHotspot);
    }

    #[test]
    fn test_duplicate_hotspot_id_across_screens_is_fine() {
        let mut second = valid_screen();
        second.name = "KeypadDown".to_string();
        second.image.address = 128_000;

        let report = validate(
            &build(vec![valid_screen(), second]),
            OverlapPolicy::DeclarationOrder,
        );
        assert!(report.is_valid(), "{}", report.format_message());
    }

    #[test]
    fn test_image_layout_error() {
        let mut screen = valid_screen();
        screen.image.size = 64_000;

        let report = validate(&build(vec![screen]), OverlapPolicy::DeclarationOrder);
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ImageLayout));
    }

    #[test]
    fn test_out_of_bounds_hotspot() {
        let mut screen = valid_screen();
        screen
            .hotspots
            .push(Hotspot::new("Key_X", "Digit", Rect::new(150, 0, 200, 59)));

        let report = validate(&build(vec![screen]), OverlapPolicy::DeclarationOrder);
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfBounds));
    }

    #[test]
    fn test_overlap_policy() {
        let mut screen = valid_screen();
        screen
            .hotspots
            .push(Hotspot::new("Key_Wide", "Digit", Rect::new(30, 30, 99, 99)));
        let set = build(vec![screen]);

        let lenient = validate(&set, OverlapPolicy::DeclarationOrder);
        assert!(lenient.is_valid());
        assert_eq!(lenient.warnings.len(), 2); // overlaps Key_7 and Key_8

        let strict = validate(&set, OverlapPolicy::Reject);
        assert!(!strict.is_valid());
        assert_eq!(strict.errors.len(), 2);
    }

    #[test]
    fn test_file_length_mismatch() {
        let set = ResourceSet::build(vec![valid_screen()], Vec::new(), Vec::new(), Some(1));
        let report = validate(&set, OverlapPolicy::DeclarationOrder);
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::FileLengthMismatch));
    }

    #[test]
    fn test_duplicate_value_name() {
        let set = ResourceSet::build(
            vec![valid_screen()],
            vec![
                ValueDef::new("Display", Value::from("")),
                ValueDef::new("Display", Value::Int(0)),
            ],
            Vec::new(),
            None,
        );
        let report = validate(&set, OverlapPolicy::DeclarationOrder);
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateValue));
    }

    #[test]
    fn test_malformed_rect() {
        let mut screen = valid_screen();
        screen
            .hotspots
            .push(Hotspot::new("Key_Bad", "Digit", Rect::new(59, 0, 0, 59)));

        let report = validate(&build(vec![screen]), OverlapPolicy::DeclarationOrder);
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedRect));
    }
}
