use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Pattern every stored color must match.
pub const HEX_COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

/// Stroke color used when a line schema carries no color of its own.
pub const DEFAULT_LINE_COLOR: &str = "#800080";

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern is a valid regex"));

/// An RGB triple with each channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Format back to `#RRGGBB` (uppercase).
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Parse a `#RRGGBB` string into a normalized [`Rgb`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ShapeError> {
    if !is_hex_color(hex) {
        return Err(ShapeError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ShapeError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb::from_u8(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}
