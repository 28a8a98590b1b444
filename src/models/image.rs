//! Backing image metadata for screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel format of a screen's backing image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorDepth {
    /// 1 byte per pixel, RGB 3:3:2
    Color8bpp,
    /// 2 bytes per pixel, RGB 5:6:5
    Color16bpp,
    /// 3 bytes per pixel, RGB 8:8:8
    Color24bpp,
}

impl ColorDepth {
    /// Bytes occupied by one pixel in this format.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            Self::Color8bpp => 1,
            Self::Color16bpp => 2,
            Self::Color24bpp => 3,
        }
    }
}

impl FromStr for ColorDepth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Color8bpp" => Ok(Self::Color8bpp),
            "Color16bpp" => Ok(Self::Color16bpp),
            "Color24bpp" => Ok(Self::Color24bpp),
            other => anyhow::bail!(
                "Unknown color depth '{other}'. Expected Color8bpp, Color16bpp, or Color24bpp"
            ),
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Color8bpp => "Color8bpp",
            Self::Color16bpp => "Color16bpp",
            Self::Color24bpp => "Color24bpp",
        };
        write!(f, "{name}")
    }
}

/// Layout of a screen's backing image inside the screen file.
///
/// The image data itself lives in an external flash/file blob; the engine only
/// carries the metadata through to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Byte offset of the image within the screen file
    pub address: u32,
    /// Total image size in bytes
    pub size: u32,
    /// Visible width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row stride in pixels
    pub stride: u32,
    /// Pixel format
    pub depth: ColorDepth,
}

impl ImageInfo {
    /// Image size implied by the declared dimensions:
    /// `stride * height * bytes_per_pixel`.
    #[must_use]
    pub const fn expected_size(&self) -> u32 {
        self.stride * self.height * self.depth.bytes_per_pixel()
    }

    /// Checks the declared layout for internal consistency.
    ///
    /// Returns the first inconsistency found as a human-readable message,
    /// or `None` if the layout is sound. The caller decides whether this is
    /// fatal (it is, at manifest load time).
    #[must_use]
    pub fn layout_error(&self) -> Option<String> {
        if self.width == 0 || self.height == 0 {
            return Some(format!(
                "image dimensions must be non-zero (got {}x{})",
                self.width, self.height
            ));
        }
        if self.width > self.stride {
            return Some(format!(
                "image width {} exceeds row stride {}",
                self.width, self.stride
            ));
        }
        if self.expected_size() != self.size {
            return Some(format!(
                "declared image size {} does not match stride {} * height {} * {} bytes/px = {}",
                self.size,
                self.stride,
                self.height,
                self.depth.bytes_per_pixel(),
                self.expected_size()
            ));
        }
        None
    }
}
