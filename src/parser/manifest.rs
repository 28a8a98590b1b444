//! Screen manifest parsing.
//!
//! This module parses the C-macro style manifest emitted by the offline
//! screen designer (`START_SCREEN(...)`, `DEFINE_HOTSPOT(...)`, ...) into a
//! [`ResourceSet`]. The preprocessor scaffolding the designer wraps around
//! the data (`#ifndef`/`#define`/`#undef`) is skipped; every other line must
//! be a recognized block declaration.

use crate::models::{
    Area, ColorDepth, Hotspot, ImageInfo, Location, NamedColor, Rect, ResourceSet, Rgb, Screen,
    Value, ValueDef,
};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// Parsing state machine states.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    /// Between blocks
    TopLevel,
    /// Inside START_SCREEN/END_SCREEN, collecting image attributes
    InScreen(String),
    /// Inside START_HOTSPOTS/END_HOTSPOTS for the named screen
    InHotspots(String),
    /// Inside START_LOCATIONS/END_LOCATIONS
    InLocations(String),
    /// Inside START_AREAS/END_AREAS
    InAreas(String),
    /// Inside START_GROUP/END_GROUP
    InGroup(String),
    /// Inside START_VALUES/END_VALUES
    InValues,
    /// Inside START_STR_VALUES/END_STR_VALUES
    InStrValues,
    /// Inside START_COLORS/END_COLORS
    InColors,
}

/// Image attributes collected while inside a screen block.
#[derive(Debug, Default)]
struct PendingImage {
    address: Option<u32>,
    size: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
    stride: Option<u32>,
    depth: Option<ColorDepth>,
}

impl PendingImage {
    fn finish(self, screen: &str) -> Result<ImageInfo> {
        let require = |field: Option<u32>, name: &str| {
            field.with_context(|| format!("Screen '{screen}' is missing {name}"))
        };
        Ok(ImageInfo {
            address: require(self.address, "IMAGE_ADDRESS")?,
            size: require(self.size, "IMAGE_SIZE")?,
            width: require(self.width, "IMAGE_WIDTH")?,
            height: require(self.height, "IMAGE_HEIGHT")?,
            stride: require(self.stride, "IMAGE_STRIDE")?,
            depth: self
                .depth
                .with_context(|| format!("Screen '{screen}' is missing IMAGE_DEPTH"))?,
        })
    }
}

/// Parses a screen manifest file into a [`ResourceSet`].
///
/// # Errors
///
/// Returns errors for unreadable files and for any syntactic or
/// cross-reference fault in the manifest, with line number context. The
/// returned set still needs [`crate::models::validate`] for the structural
/// invariants (image layout, bounds, overlaps).
pub fn parse_manifest(path: &Path) -> Result<ResourceSet> {
    if !path.exists() {
        anyhow::bail!("Manifest file not found: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

    parse_manifest_str(&content)
        .with_context(|| format!("Failed to parse manifest file: {}", path.display()))
}

/// Parses a screen manifest from a string.
pub fn parse_manifest_str(content: &str) -> Result<ResourceSet> {
    let macro_re = Regex::new(r"^([A-Z][A-Z0-9_]*)\s*\(\s*(.*?)\s*\)$").unwrap();

    let mut state = ParseState::TopLevel;
    let mut screens: Vec<Screen> = Vec::new();
    let mut pending_image = PendingImage::default();
    let mut values: Vec<ValueDef> = Vec::new();
    let mut colors: Vec<NamedColor> = Vec::new();
    let mut file_length: Option<u32> = None;
    // Group projections are cross-checked against the hotspot table after the
    // whole file is read; membership itself derives from hotspot tags.
    let mut group_refs: Vec<(String, String)> = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line_num = idx + 1;

        // Skip blanks and preprocessor scaffolding
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let captures = macro_re
            .captures(line)
            .with_context(|| format!("Line {line_num}: unrecognized manifest line '{line}'"))?;
        let keyword = captures.get(1).unwrap().as_str();
        let args = captures.get(2).unwrap().as_str();

        state = step(
            state,
            keyword,
            args,
            line_num,
            &mut screens,
            &mut pending_image,
            &mut values,
            &mut colors,
            &mut file_length,
            &mut group_refs,
        )
        .with_context(|| format!("Line {line_num}: in '{line}'"))?;
    }

    if state != ParseState::TopLevel {
        anyhow::bail!("Manifest ended inside an unterminated block ({state:?})");
    }

    for (group, hotspot) in &group_refs {
        let known = screens
            .iter()
            .flat_map(|s| &s.hotspots)
            .any(|h| &h.id == hotspot && &h.tag == group);
        if !known {
            anyhow::bail!("Group '{group}' references unknown hotspot '{hotspot}'");
        }
    }

    Ok(ResourceSet::build(screens, values, colors, file_length))
}

/// Processes one macro line, returning the next parse state.
#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
fn step(
    state: ParseState,
    keyword: &str,
    args: &str,
    line_num: usize,
    screens: &mut Vec<Screen>,
    pending_image: &mut PendingImage,
    values: &mut Vec<ValueDef>,
    colors: &mut Vec<NamedColor>,
    file_length: &mut Option<u32>,
    group_refs: &mut Vec<(String, String)>,
) -> Result<ParseState> {
    match (&state, keyword) {
        (ParseState::TopLevel, "START_SCREEN") => {
            *pending_image = PendingImage::default();
            Ok(ParseState::InScreen(args.to_string()))
        }
        (ParseState::InScreen(_), "IMAGE_ADDRESS") => {
            pending_image.address = Some(parse_u32(args)?);
            Ok(state)
        }
        (ParseState::InScreen(_), "IMAGE_SIZE") => {
            pending_image.size = Some(parse_u32(args)?);
            Ok(state)
        }
        (ParseState::InScreen(_), "IMAGE_WIDTH") => {
            pending_image.width = Some(parse_u32(args)?);
            Ok(state)
        }
        (ParseState::InScreen(_), "IMAGE_HEIGHT") => {
            pending_image.height = Some(parse_u32(args)?);
            Ok(state)
        }
        (ParseState::InScreen(_), "IMAGE_STRIDE") => {
            pending_image.stride = Some(parse_u32(args)?);
            Ok(state)
        }
        (ParseState::InScreen(_), "IMAGE_DEPTH") => {
            pending_image.depth = Some(args.parse()?);
            Ok(state)
        }
        (ParseState::InScreen(name), "END_SCREEN") => {
            if args != name.as_str() {
                anyhow::bail!("END_SCREEN({args}) does not close START_SCREEN({name})");
            }
            let image = std::mem::take(pending_image).finish(name)?;
            screens.push(Screen::new(name.clone(), image));
            Ok(ParseState::TopLevel)
        }

        (ParseState::TopLevel, "START_HOTSPOTS") => {
            screen_mut(screens, args)?;
            Ok(ParseState::InHotspots(args.to_string()))
        }
        (ParseState::InHotspots(name), "DEFINE_HOTSPOT") => {
            let parts = split_args(args, 6, "DEFINE_HOTSPOT")?;
            let rect = Rect::new(
                parse_i32(parts[2])?,
                parse_i32(parts[3])?,
                parse_i32(parts[4])?,
                parse_i32(parts[5])?,
            );
            screen_mut(screens, name)?
                .hotspots
                .push(Hotspot::new(parts[0], parts[1], rect));
            Ok(state)
        }
        (ParseState::InHotspots(name), "END_HOTSPOTS") => {
            if args != name.as_str() {
                anyhow::bail!("END_HOTSPOTS({args}) does not close START_HOTSPOTS({name})");
            }
            Ok(ParseState::TopLevel)
        }
        (ParseState::TopLevel, "HOTSPOT_COUNT") => {
            let parts = split_args(args, 2, "HOTSPOT_COUNT")?;
            let declared = parse_u32(parts[1])? as usize;
            let actual = screen_mut(screens, parts[0])?.hotspots.len();
            if declared != actual {
                anyhow::bail!(
                    "HOTSPOT_COUNT for '{}' declares {declared} hotspots but {actual} are defined",
                    parts[0]
                );
            }
            Ok(state)
        }

        (ParseState::TopLevel, "START_LOCATIONS") => {
            screen_mut(screens, args)?;
            Ok(ParseState::InLocations(args.to_string()))
        }
        (ParseState::InLocations(name), "DEFINE_LOCATION") => {
            let parts = split_args(args, 3, "DEFINE_LOCATION")?;
            screen_mut(screens, name)?.locations.push(Location::new(
                parts[0],
                parse_i32(parts[1])?,
                parse_i32(parts[2])?,
            ));
            Ok(state)
        }
        (ParseState::InLocations(name), "END_LOCATIONS") => {
            if args != name.as_str() {
                anyhow::bail!("END_LOCATIONS({args}) does not close START_LOCATIONS({name})");
            }
            Ok(ParseState::TopLevel)
        }

        (ParseState::TopLevel, "START_AREAS") => {
            screen_mut(screens, args)?;
            Ok(ParseState::InAreas(args.to_string()))
        }
        (ParseState::InAreas(name), "DEFINE_AREA") => {
            let parts = split_args(args, 5, "DEFINE_AREA")?;
            screen_mut(screens, name)?.areas.push(Area::new(
                parts[0],
                parse_i32(parts[1])?,
                parse_i32(parts[2])?,
                parse_i32(parts[3])?,
                parse_i32(parts[4])?,
            ));
            Ok(state)
        }
        (ParseState::InAreas(name), "END_AREAS") => {
            if args != name.as_str() {
                anyhow::bail!("END_AREAS({args}) does not close START_AREAS({name})");
            }
            Ok(ParseState::TopLevel)
        }

        (ParseState::TopLevel, "START_GROUP") => Ok(ParseState::InGroup(args.to_string())),
        (ParseState::InGroup(name), "GROUP_HOTSPOT") => {
            let parts = split_args(args, 6, "GROUP_HOTSPOT")?;
            if parts[1] != name.as_str() {
                anyhow::bail!(
                    "GROUP_HOTSPOT tag '{}' does not match enclosing group '{name}'",
                    parts[1]
                );
            }
            group_refs.push((name.clone(), parts[0].to_string()));
            Ok(state)
        }
        (ParseState::InGroup(name), "END_GROUP") => {
            if args != name.as_str() {
                anyhow::bail!("END_GROUP({args}) does not close START_GROUP({name})");
            }
            Ok(ParseState::TopLevel)
        }

        (ParseState::TopLevel, "START_VALUES") => Ok(ParseState::InValues),
        (ParseState::InValues, "DEFINE_VALUE") => {
            let parts = split_args(args, 2, "DEFINE_VALUE")?;
            let default = parts[1]
                .parse::<i64>()
                .with_context(|| format!("Invalid numeric default '{}'", parts[1]))?;
            values.push(ValueDef::new(parts[0], Value::Int(default)));
            Ok(state)
        }
        (ParseState::InValues, "END_VALUES") => Ok(ParseState::TopLevel),

        (ParseState::TopLevel, "START_STR_VALUES") => Ok(ParseState::InStrValues),
        (ParseState::InStrValues, "DEFINE_STR_VALUE") => {
            let (name, default) = split_name_and_string(args, line_num)?;
            values.push(ValueDef::new(name, Value::Str(default)));
            Ok(state)
        }
        (ParseState::InStrValues, "END_STR_VALUES") => Ok(ParseState::TopLevel),

        (ParseState::TopLevel, "START_COLORS") => Ok(ParseState::InColors),
        (ParseState::InColors, "DEFINE_COLOR") => {
            let parts = split_args(args, 2, "DEFINE_COLOR")?;
            colors.push(NamedColor::new(parts[0], Rgb::parse(parts[1])?));
            Ok(state)
        }
        (ParseState::InColors, "END_COLORS") => Ok(ParseState::TopLevel),

        (ParseState::TopLevel, "SCREEN_FILE_LENGTH") => {
            *file_length = Some(parse_u32(args)?);
            Ok(state)
        }

        _ => anyhow::bail!("Unexpected {keyword} in state {state:?}"),
    }
}

/// Finds a previously declared screen by name.
fn screen_mut<'a>(screens: &'a mut [Screen], name: &str) -> Result<&'a mut Screen> {
    screens
        .iter_mut()
        .find(|s| s.name == name)
        .with_context(|| format!("Reference to undeclared screen '{name}'"))
}

/// Splits a comma-separated argument list, requiring an exact count.
fn split_args<'a>(args: &'a str, expected: usize, what: &str) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != expected {
        anyhow::bail!(
            "{what} expects {expected} arguments, got {} in '{args}'",
            parts.len()
        );
    }
    Ok(parts)
}

/// Splits `name, "string default"` where the string may contain commas.
fn split_name_and_string(args: &str, line_num: usize) -> Result<(String, String)> {
    let (name, rest) = args
        .split_once(',')
        .with_context(|| format!("Line {line_num}: DEFINE_STR_VALUE expects a name and a value"))?;
    let rest = rest.trim();
    let default = rest
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(rest);
    Ok((name.trim().to_string(), default.to_string()))
}

fn parse_u32(value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .with_context(|| format!("Invalid unsigned integer '{value}'"))
}

fn parse_i32(value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .with_context(|| format!("Invalid integer '{value}'"))
}
