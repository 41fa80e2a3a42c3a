//! sRGB color type
//!
//! sRGB is the display color space: palettes, image pixels and rendered
//! glyph cells are all expressed in it.

use std::fmt;
use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::transfer::linear_to_srgb;
use crate::palette::ParseColorError;

/// A color in sRGB color space.
///
/// Channels are stored normalized to 0.0..=1.0 (mapping to 0..=255 for
/// 8-bit). Values converted back from [`Oklab`] may fall outside that range
/// for out-of-gamut inputs; [`to_bytes()`](Srgb::to_bytes) rounds and clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from normalized float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use glyph_match::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Each channel is scaled to 0..=255, rounded to the nearest integer and
    /// clamped.
    ///
    /// # Example
    /// ```
    /// use glyph_match::Srgb;
    /// let color = Srgb::new(1.2, 0.5, -0.1);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Lowercase `#rrggbb` form of the rounded color.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode a linear color. No clamping is applied here.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl From<Oklab> for Srgb {
    /// Perceptual to display conversion (through linear RGB).
    fn from(lab: Oklab) -> Self {
        Srgb::from(LinearRgb::from(lab))
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyph_match::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_constructors() {
        let color = Srgb::from_u8(255, 128, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);

        assert_eq!(Srgb::from_bytes([255, 128, 0]), color);

        assert_eq!(Srgb::from_u8(0, 0, 0).to_bytes(), [0, 0, 0]);
        assert_eq!(Srgb::from_u8(127, 127, 127).to_bytes(), [127, 127, 127]);
        assert_eq!(Srgb::from_u8(255, 255, 255).to_bytes(), [255, 255, 255]);
    }

    #[test]
    fn test_to_bytes_clamps_out_of_gamut() {
        assert_eq!(Srgb::new(1.5, -0.25, 0.5).to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Srgb::from_u8(0xaa, 0x05, 0xff);
        assert_eq!(color.to_hex(), "#aa05ff");
        assert_eq!(color.to_string(), "#aa05ff");
        let parsed: Srgb = color.to_hex().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Srgb = "#ABC".parse().unwrap();
        assert_eq!(color, Srgb::from_u8(0xAA, 0xBB, 0xCC));
        let lower: Srgb = "f00".parse().unwrap();
        assert_eq!(lower.to_bytes(), [255, 0, 0]);
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#ééé".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Srgb = "  #ABCDEF  ".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }
}
