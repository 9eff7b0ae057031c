//! Display colors used by furniture templates.
//!
//! Colors are plain RGB triples. In data files they are written as `#rgb`,
//! `#rrggbb`, or one of the [`palette`] names.

use core::fmt;
use core::str::FromStr;

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Looks up a palette color by name (case-insensitive, `grey` accepted).
    pub fn named(name: &str) -> Option<Self> {
        use palette::*;

        let color = match name.to_ascii_lowercase().as_str() {
            "orange" => ORANGE,
            "orange_alt" => ORANGE_ALT,
            "green" => GREEN,
            "green_alt" => GREEN_ALT,
            "red" => RED,
            "red_alt" => RED_ALT,
            "blue" => BLUE,
            "purple" => PURPLE,
            "purple_alt" => PURPLE_ALT,
            "yellow" => YELLOW,
            "yellow_alt" => YELLOW_ALT,
            "slate_alt" => SLATE_ALT,
            "tan" => TAN,
            "teal" => TEAL,
            "brown" => BROWN,
            "gray" | "grey" => GRAY,
            "white" => WHITE,
            "black" => BLACK,
            _ => return None,
        };
        Some(color)
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                // #abc expands to #aabbcc
                let expand = |nibble: u32| (nibble as u8) * 0x11;
                Some(Self::rgb(
                    expand((value >> 8) & 0xf),
                    expand((value >> 4) & 0xf),
                    expand(value & 0xf),
                ))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color string that is neither hex nor a palette name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}'")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Self::parse_hex(digits),
            None => Self::named(trimmed),
        };
        parsed.ok_or_else(|| ColorParseError(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Named colors shared by the built-in catalog and data files.
pub mod palette {
    use super::Color;

    pub const ORANGE: Color = Color::from_hex(0xe67e22);
    pub const ORANGE_ALT: Color = Color::from_hex(0xf0a868);
    pub const GREEN: Color = Color::from_hex(0x27ae60);
    pub const GREEN_ALT: Color = Color::from_hex(0x6fcf97);
    pub const RED: Color = Color::from_hex(0xc0392b);
    pub const RED_ALT: Color = Color::from_hex(0xe57368);
    pub const BLUE: Color = Color::from_hex(0x2e86de);
    pub const PURPLE: Color = Color::from_hex(0x8e44ad);
    pub const PURPLE_ALT: Color = Color::from_hex(0xb983cf);
    pub const YELLOW: Color = Color::from_hex(0xffff00);
    pub const YELLOW_ALT: Color = Color::from_hex(0xf7dc6f);
    pub const SLATE_ALT: Color = Color::from_hex(0x3d4b57);
    pub const TAN: Color = Color::from_hex(0xd2b48c);
    pub const TEAL: Color = Color::from_hex(0x008080);
    pub const BROWN: Color = Color::from_hex(0xa52a2a);
    pub const GRAY: Color = Color::from_hex(0x808080);
    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const BLACK: Color = Color::from_hex(0x000000);
}
