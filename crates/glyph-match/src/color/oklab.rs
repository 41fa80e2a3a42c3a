//! Oklab perceptual color space
//!
//! Glyph and region signatures are sequences of Oklab colors, and every
//! comparison the matcher makes is a Euclidean distance in this space.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f32,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f32,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_match::Oklab;
    ///
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.l, 0.5);
    /// ```
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance in Oklab space.
    #[inline]
    pub fn distance_squared(self, other: Oklab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Euclidean distance in Oklab space.
    ///
    /// This is the only metric used for matching. Region scores are the mean
    /// of these per-pixel distances, so the square root cannot be skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_match::Oklab;
    ///
    /// let a = Oklab::new(0.0, 0.3, 0.0);
    /// let b = Oklab::new(0.0, 0.0, 0.4);
    /// assert!((a.distance(b) - 0.5).abs() < 1e-6);
    /// assert_eq!(a.distance(b), b.distance(a));
    /// ```
    #[inline]
    pub fn distance(self, other: Oklab) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab (2021-01-25 matrices).
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to LMS (M1)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // LMS to Lab (M2)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Srgb> for Oklab {
    /// Display to perceptual conversion (through linear RGB).
    fn from(srgb: Srgb) -> Self {
        Oklab::from(LinearRgb::from(srgb))
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB. The result is not clamped.
    fn from(lab: Oklab) -> Self {
        // Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for palette crate comparison (single matrix transform)
    const PALETTE_TOLERANCE: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let linear: LinSrgb<f32> = LinSrgb::new(r, g, b);
            let theirs: PaletteOklab<f32> = linear.into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_display_round_trip_reference_colors() {
        let reference = [
            [0, 0, 0],
            [255, 255, 255],
            [128, 128, 128],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
        ];
        for bytes in reference {
            let lab = Oklab::from(Srgb::from_bytes(bytes));
            assert_eq!(
                Srgb::from(lab).to_bytes(),
                bytes,
                "round trip changed {bytes:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip_every_grey() {
        for v in 0..=255u8 {
            let lab = Oklab::from(Srgb::from_u8(v, v, v));
            assert_eq!(Srgb::from(lab).to_bytes(), [v, v, v], "grey {v}");
        }
    }

    #[test]
    fn test_display_round_trip_cube_lattice() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let bytes = [r as u8, g as u8, b as u8];
                    let lab = Oklab::from(Srgb::from_bytes(bytes));
                    assert_eq!(Srgb::from(lab).to_bytes(), bytes);
                }
            }
        }
    }

    #[test]
    fn test_oklab_known_values() {
        let white = Oklab::from(Srgb::from_u8(255, 255, 255));
        assert!(approx_eq(white.l, 1.0, 1e-5), "white L = {}", white.l);
        assert!(approx_eq(white.a, 0.0, 1e-5));
        assert!(approx_eq(white.b, 0.0, 1e-5));

        let black = Oklab::from(Srgb::from_u8(0, 0, 0));
        assert_eq!(black, Oklab::new(0.0, 0.0, 0.0));

        // Pure red: L≈0.628, a≈0.225, b≈0.126
        let red = Oklab::from(Srgb::from_u8(255, 0, 0));
        assert!(approx_eq(red.l, 0.627955, 1e-4), "red L = {}", red.l);
        assert!(approx_eq(red.a, 0.224863, 1e-4), "red a = {}", red.a);
        assert!(approx_eq(red.b, 0.125846, 1e-4), "red b = {}", red.b);
    }

    #[test]
    fn test_distance_symmetry_and_identity() {
        let samples = [
            Oklab::new(0.6, 0.1, -0.05),
            Oklab::new(0.3, -0.2, 0.1),
            Oklab::new(1.0, 0.0, 0.0),
            Oklab::new(0.0, 0.0, 0.0),
            Oklab::new(-0.2, 0.7, 3.0),
        ];
        for &a in &samples {
            assert_eq!(a.distance(a), 0.0);
            for &b in &samples {
                assert_eq!(a.distance(b), b.distance(a));
            }
        }
    }

    #[test]
    fn test_distance_known_values() {
        let white = Oklab::new(1.0, 0.0, 0.0);
        let black = Oklab::new(0.0, 0.0, 0.0);
        assert!((white.distance(black) - 1.0).abs() < 1e-6);
        assert!((white.distance_squared(black) - 1.0).abs() < 1e-6);

        let red_ish = Oklab::new(0.5, 0.2, 0.0);
        let blue_ish = Oklab::new(0.5, 0.0, -0.2);
        assert!((red_ish.distance_squared(blue_ish) - 0.08).abs() < 1e-6);
        assert!((red_ish.distance(blue_ish) - 0.08f32.sqrt()).abs() < 1e-6);
    }
}
