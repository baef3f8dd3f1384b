//! CSS-style colors used by themes and widget styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An sRGB color with alpha.
///
/// Colors serialize to and from their CSS text, so raw themes can be written
/// by hand:
///
/// ```rust
/// use themekit::Color;
///
/// let ink = Color::parse("rgba(0, 0, 0, 0.87)").unwrap();
/// assert_eq!(ink.a, 0.87);
/// assert_eq!(Color::parse("#00bcd4").unwrap().to_string(), "#00bcd4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(..)`, `rgba(..)` and a few names.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let text = input.trim();
        match text.to_ascii_lowercase().as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(input));
        }
        if let Some(args) = strip_call(text, "rgba") {
            return parse_channels(args, true).ok_or_else(|| ColorParseError::new(input));
        }
        if let Some(args) = strip_call(text, "rgb") {
            return parse_channels(args, false).ok_or_else(|| ColorParseError::new(input));
        }
        Err(ColorParseError::new(input))
    }

    /// Returns this color with its alpha replaced by `alpha`, clamped to `[0, 1]`.
    pub fn fade(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// True when the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Nearest index in the ANSI 256-color palette, ignoring alpha.
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
            };
        }
        let cube = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }
}

fn strip_call<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            Some(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_channels(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parts[0].parse().ok()?;
    let g = parts[1].parse().ok()?;
    let b = parts[2].parse().ok()?;
    let a = if with_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(Color::rgba(r, g, b, a))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Material palette swatches referenced by the built-in raw themes.
pub mod swatch {
    use super::Color;

    pub const CYAN_500: Color = Color::rgb(0x00, 0xbc, 0xd4);
    pub const CYAN_700: Color = Color::rgb(0x00, 0x97, 0xa7);
    pub const PINK_A100: Color = Color::rgb(0xff, 0x80, 0xab);
    pub const PINK_A200: Color = Color::rgb(0xff, 0x40, 0x81);
    pub const PINK_A400: Color = Color::rgb(0xf5, 0x00, 0x57);
    pub const GREY_100: Color = Color::rgb(0xf5, 0xf5, 0xf5);
    pub const GREY_300: Color = Color::rgb(0xe0, 0xe0, 0xe0);
    pub const GREY_500: Color = Color::rgb(0x9e, 0x9e, 0x9e);
    pub const GREY_600: Color = Color::rgb(0x75, 0x75, 0x75);
    pub const RED_500: Color = Color::rgb(0xf4, 0x43, 0x36);
    pub const DARK_BLACK: Color = Color::rgba(0, 0, 0, 0.87);
    pub const LIGHT_BLACK: Color = Color::rgba(0, 0, 0, 0.54);
    pub const MINI_BLACK: Color = Color::rgba(0, 0, 0, 0.12);
    pub const FULL_BLACK: Color = Color::BLACK;
    pub const FULL_WHITE: Color = Color::WHITE;
    pub const CHARCOAL: Color = Color::rgb(0x30, 0x30, 0x30);
}
