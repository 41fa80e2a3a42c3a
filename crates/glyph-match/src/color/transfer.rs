//! sRGB transfer functions (IEC 61966-2-1).
//!
//! Evaluated exactly rather than through a lookup table: glyph signatures are
//! computed once per palette entry, so the cost is negligible and the
//! display round-trip stays exact.

/// Decode one gamma-encoded channel (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v >= 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Encode one linear-light channel back to gamma-encoded sRGB.
///
/// Input is not clamped; out-of-gamut values pass through the curve as-is.
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v >= 0.0031308 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}
