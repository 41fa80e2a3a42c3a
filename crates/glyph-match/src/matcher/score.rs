//! Perceptual scoring and nearest-glyph search.

use crate::api::{DimensionError, GlyphError};
use crate::catalog::Glyph;
use crate::sample::Region;

/// Mean per-pixel Oklab distance between a region and a glyph.
///
/// Lower is better; 0.0 means the glyph reproduces the region exactly.
///
/// # Errors
///
/// [`DimensionError::SignatureLength`] when the signatures differ in length.
pub fn score(region: &Region, glyph: &Glyph) -> Result<f32, DimensionError> {
    let (r, g) = (&region.signature, &glyph.signature);
    if r.len() != g.len() {
        return Err(DimensionError::SignatureLength {
            expected: r.len(),
            actual: g.len(),
        });
    }
    if r.is_empty() {
        return Ok(0.0);
    }
    let total: f32 = r.iter().zip(g).map(|(&a, &b)| a.distance(b)).sum();
    Ok(total / r.len() as f32)
}

/// The glyph with the lowest [`score`] for `region`.
///
/// Candidates are scanned in order and only a strictly lower score replaces
/// the current best, so among equal scores the earliest glyph wins.
///
/// # Errors
///
/// [`GlyphError::EmptyCatalog`] when `glyphs` is empty, or a dimension error
/// from [`score`].
pub fn find_best_glyph<'a>(region: &Region, glyphs: &'a [Glyph]) -> Result<&'a Glyph, GlyphError> {
    let mut best: Option<(f32, &'a Glyph)> = None;
    for glyph in glyphs {
        let s = score(region, glyph)?;
        match best {
            Some((best_score, _)) if s >= best_score => {}
            _ => best = Some((s, glyph)),
        }
    }
    best.map(|(_, glyph)| glyph).ok_or(GlyphError::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Oklab, Srgb};

    fn glyph(code: u8, signature: Vec<Oklab>) -> Glyph {
        Glyph {
            code,
            background_index: 0,
            foreground_index: 1,
            background: Srgb::from_u8(0, 0, 0),
            foreground: Srgb::from_u8(255, 255, 255),
            signature,
        }
    }

    fn region(signature: Vec<Oklab>) -> Region {
        Region {
            column: 0,
            row: 0,
            signature,
        }
    }

    #[test]
    fn test_score_is_mean_distance() {
        let r = region(vec![Oklab::new(0.0, 0.0, 0.0), Oklab::new(0.0, 0.0, 0.0)]);
        let g = glyph(0, vec![Oklab::new(0.3, 0.0, 0.0), Oklab::new(0.0, 0.4, 0.3)]);
        // distances 0.3 and 0.5
        assert!((score(&r, &g).unwrap() - 0.4).abs() < 1e-6);
        assert_eq!(score(&r, &glyph(0, r.signature.clone())).unwrap(), 0.0);
    }

    #[test]
    fn test_score_length_mismatch() {
        let r = region(vec![Oklab::new(0.0, 0.0, 0.0); 4]);
        let g = glyph(0, vec![Oklab::new(0.0, 0.0, 0.0); 2]);
        assert_eq!(
            score(&r, &g),
            Err(DimensionError::SignatureLength {
                expected: 4,
                actual: 2
            })
        );
        assert!(matches!(
            find_best_glyph(&r, std::slice::from_ref(&g)),
            Err(GlyphError::Dimension(_))
        ));
    }

    #[test]
    fn test_picks_lowest_score() {
        let target = Oklab::new(0.5, 0.1, 0.0);
        let r = region(vec![target]);
        let glyphs = vec![
            glyph(1, vec![Oklab::new(0.0, 0.0, 0.0)]),
            glyph(2, vec![Oklab::new(0.5, 0.1, 0.01)]),
            glyph(3, vec![Oklab::new(1.0, 0.0, 0.0)]),
        ];
        assert_eq!(find_best_glyph(&r, &glyphs).unwrap().code, 2);
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        let r = region(vec![Oklab::new(0.5, 0.0, 0.0)]);
        let glyphs = vec![
            glyph(10, vec![Oklab::new(0.0, 0.0, 0.0)]),
            glyph(11, vec![Oklab::new(0.4, 0.0, 0.0)]),
            glyph(12, vec![Oklab::new(0.8, 0.0, 0.0)]),
            glyph(13, vec![Oklab::new(0.4, 0.0, 0.0)]),
        ];
        assert_eq!(find_best_glyph(&r, &glyphs).unwrap().code, 11);
    }

    #[test]
    fn test_empty_candidates() {
        let r = region(vec![Oklab::new(0.5, 0.0, 0.0)]);
        assert!(matches!(
            find_best_glyph(&r, &[]),
            Err(GlyphError::EmptyCatalog)
        ));
    }
}
