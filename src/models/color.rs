//! RGB color handling with hex parsing and packed pixel formats.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value as declared by a `Color` manifest entry.
///
/// Supports parsing from the manifest's `0xRRGGBB` literal form as well as
/// the `#RRGGBB` hex form, and packing into the wire formats the display
/// hardware consumes (RGB565, RGB332).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Creates a new `Rgb` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `Rgb` from a color literal.
    ///
    /// Supports formats: "0xRRGGBB", "#RRGGBB", "RRGGBB" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid 6-digit hex color.
    pub fn parse(literal: &str) -> Result<Self> {
        let hex = literal.trim();
        let hex = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .or_else(|| hex.strip_prefix('#'))
            .unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid color literal '{literal}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .with_context(|| format!("Invalid red channel in color '{literal}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .with_context(|| format!("Invalid green channel in color '{literal}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .with_context(|| format!("Invalid blue channel in color '{literal}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Returns the color as a packed `0x00RRGGBB` value.
    #[must_use]
    pub const fn to_packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Packs the color into 16-bit 5:6:5 red:green:blue, the layout used by
    /// `Color16bpp` screen images.
    #[must_use]
    pub const fn to_rgb565(&self) -> u16 {
        (((self.r as u16) & 0xF8) << 8) | (((self.g as u16) & 0xFC) << 3) | ((self.b as u16) >> 3)
    }

    /// Packs the color into 8-bit 3:3:2 red:green:blue, the layout used by
    /// `Color8bpp` screen images.
    #[must_use]
    pub const fn to_rgb332(&self) -> u8 {
        (self.r & 0xE0) | ((self.g & 0xE0) >> 3) | (self.b >> 6)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Rgb {
    /// Default color is black (#000000).
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// A named color constant from the manifest's color table.
///
/// The engine carries these through to the rendering collaborator without
/// interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Symbolic name (e.g. "DisplayBackcolor")
    pub name: String,
    /// Color value
    pub color: Rgb,
}

impl NamedColor {
    /// Creates a new `NamedColor`.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
