//! Paint primitives
//!
//! Colors and shadows render to CSS-style strings. Rendering is a pure function
//! of the stored components, so equal values always produce equal strings.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a color from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not start with `#`
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The string had a length other than `#RRGGBB` or `#RRGGBBAA`
    #[error("color '{0}' must be #RRGGBB or #RRGGBBAA")]
    InvalidLength(String),

    /// The string contained a non-hex digit
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGBA color, each channel in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex_str(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(value.to_string()));
        }

        let raw = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(raw))
        } else {
            let alpha = (raw & 0xFF) as f32 / 255.0;
            Ok(Self::from_hex(raw >> 8).with_alpha(alpha))
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Render as `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.a.max(0.0))
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s.trim())
    }
}

/// A single box-shadow layer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// A hard ring hugging the element edge (no offset, no blur)
    pub const fn ring(spread: f32, color: Color) -> Self {
        Self::new(0.0, 0.0, 0.0, spread, color)
    }

    /// Render as `Xpx Ypx BLURpx SPREADpx COLOR`
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::from_hex(0x2563EB).to_css(), "#2563eb");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let color = Color::BLACK.with_alpha(0.05);
        assert_eq!(color.to_css(), "rgba(0, 0, 0, 0.05)");
    }

    #[test]
    fn parses_hex_strings_with_and_without_alpha() {
        assert_eq!(
            "#18181B".parse::<Color>().unwrap(),
            Color::from_hex(0x18181B)
        );

        let translucent = Color::from_hex_str("#00000080").unwrap();
        assert_eq!(translucent.a, 128.0 / 255.0);
        assert_eq!(translucent.r, 0.0);
    }

    #[test]
    fn rejects_malformed_hex_strings() {
        assert!(matches!(
            Color::from_hex_str("18181B"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex_str("#1818"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex_str("#zz1818"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn shadow_renders_every_component() {
        let shadow = Shadow::new(0.0, 1.0, 2.0, -1.0, Color::BLACK.with_alpha(0.1));
        assert_eq!(shadow.to_css(), "0px 1px 2px -1px rgba(0, 0, 0, 0.1)");
        assert_eq!(
            Shadow::ring(3.0, Color::from_hex(0x93C5FD)).to_string(),
            "0px 0px 0px 3px #93c5fd"
        );
    }
}
