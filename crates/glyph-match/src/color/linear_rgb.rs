//! Linear RGB color type
//!
//! Linear RGB is the intermediate between the display encoding and the
//! Oklab matrices. Nothing outside the color module computes in it.

use super::srgb::Srgb;
use super::transfer::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but colors converted back
/// from out-of-gamut Oklab values may exceed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode each channel with the exact sRGB curve.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
