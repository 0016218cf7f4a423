//! Color value type and conversions between hex, RGB and HSL.
//!
//! All conversions are deterministic: HSL components are rounded to whole
//! degrees and percents, and RGB channels are rounded then clamped to `0..=255`.
//! Out-of-range HSL input is clamped (saturation, lightness) or wrapped (hue)
//! rather than rejected, since harmony rules routinely overshoot.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Max-channel branch selection compares the exact same f64 values
#![allow(clippy::float_cmp)]

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid")
});

/// Errors raised by color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color.
    #[error("Invalid color format '{0}'. Expected 6 hex digits (#RRGGBB)")]
    InvalidColorFormat(String),
}

/// Red, green and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue, saturation and lightness with whole-number components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Saturation percent, `0..=100`
    pub s: u8,
    /// Lightness percent, `0..=100`
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parses a hex color string into its RGB channels.
///
/// Accepts exactly six hex digits with an optional leading `#`, in any case.
/// No shorthand or alpha forms.
///
/// # Examples
///
/// ```
/// use huekit::models::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#3B82F6").unwrap(), Rgb { r: 59, g: 130, b: 246 });
/// assert!(hex_to_rgb("#FFF").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let captures = HEX_PATTERN
        .captures(hex)
        .ok_or_else(|| ColorError::InvalidColorFormat(hex.to_string()))?;

    let channel = |index: usize| {
        u8::from_str_radix(&captures[index], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Renders RGB channels as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Converts RGB channels to HSL using the min/max channel algorithm.
///
/// Achromatic input (all channels equal) yields `h = 0, s = 0`.
#[must_use]
#[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // Rounding can land exactly on 360
    let h = ((h * 360.0).round() as i32).rem_euclid(360);

    Hsl {
        h: h as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts HSL to RGB channels.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to `0..=100`.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0);
    let l = l.clamp(0.0, 100.0) / 100.0;

    let a = s * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// Converts HSL to a lowercase `#rrggbb` string.
///
/// # Examples
///
/// ```
/// use huekit::models::color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
/// assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#ff0000");
/// ```
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let rgb = hsl_to_rgb(h, s, l);
    rgb_to_hex(rgb.r, rgb.g, rgb.b)
}

/// A 24-bit color.
///
/// Stores RGB channels; hex and HSL forms are derived on demand. Serializes as
/// its canonical lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a hex string ("#RRGGBB" or "RRGGBB", any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(Self::from)
    }

    /// Builds a color from HSL components, clamping and wrapping as
    /// [`hsl_to_rgb`] does.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        hsl_to_rgb(h, s, l).into()
    }

    /// Builds a color from the low 24 bits of `value` (0xRRGGBB).
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Draws a uniformly random 24-bit color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u24(rng.gen_range(0..=0x00FF_FFFF))
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB` form for display.
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// RGB channels of this color.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// HSL form of this color.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
