use crate::foundation::error::{StyleError, StyleResult};
use std::fmt;
use std::str::FromStr;

/// Packed 32-bit ARGB color (`0xAARRGGBB`).
///
/// On the wire a color is always written as the evaluator's `"rgba(r, g, b, a)"` string, see
/// [`Color::to_rgba_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Self = Self(0xFFFF_0000);
    /// Opaque green.
    pub const GREEN: Self = Self(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Self = Self(0xFF00_00FF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Wrap an already packed `0xAARRGGBB` value.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// Pack individual channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Pack an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// The packed `0xAARRGGBB` value.
    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel, `0..=255`.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel, `0..=255`.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel, `0..=255`.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel, `0..=255`.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Format as `"rgba(r, g, b, a)"`.
    ///
    /// Color channels are integers in `0..=255`; alpha is normalized to `0..=1` and printed with
    /// at most three fractional digits, trailing zeros removed (`1`, `0.5`, `0.502`).
    pub fn to_rgba_string(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            format_alpha(self.alpha())
        )
    }
}

fn format_alpha(alpha: u8) -> String {
    let s = format!("{:.3}", f64::from(alpha) / 255.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_string())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    fn from_str(s: &str) -> StyleResult<Self> {
        parse_hex(s)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_rgba_string())
    }
}

fn parse_hex(s: &str) -> StyleResult<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> StyleResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| StyleError::color(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(StyleError::color("hex color must be ASCII"));
    }

    match s.len() {
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            Ok(Color::from_rgb(r, g, b))
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            Ok(Color::from_argb(a, r, g, b))
        }
        _ => Err(StyleError::color(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
