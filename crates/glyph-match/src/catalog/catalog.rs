//! The precomputed set of every renderable glyph for a font and palette.

use super::glyph::Glyph;
use crate::api::GlyphError;
use crate::color::{Oklab, Srgb};
use crate::font::{CodeSet, FontBitmap};
use crate::palette::Palette;

/// Options controlling catalog enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Skip glyphs whose background and foreground share a palette index.
    ///
    /// Such glyphs render as a solid block regardless of the character, so
    /// every code would be a duplicate candidate. Default: `true`.
    pub skip_equal_color_pairs: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            skip_equal_color_pairs: true,
        }
    }
}

impl CatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether equal-index color pairs are skipped.
    #[inline]
    pub fn skip_equal_color_pairs(mut self, skip: bool) -> Self {
        self.skip_equal_color_pairs = skip;
        self
    }
}

/// Every (background, foreground, code) glyph for a font and palette, with
/// signatures computed up front.
///
/// Glyphs are ordered by background palette index, then foreground palette
/// index, then code in [`CodeSet`] order. That order decides ties in the
/// matcher.
///
/// A catalog references no image and is meant to be built once and reused.
///
/// # Example
///
/// ```
/// use glyph_match::{CatalogOptions, CodeSet, FontBitmap, GlyphCatalog, Palette};
///
/// let font = FontBitmap::new(vec![0u8; 256 * 8]).unwrap();
/// let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
/// let codes = CodeSet::new([32, 219]);
///
/// let catalog = GlyphCatalog::build(&font, &palette, &codes, CatalogOptions::default());
/// assert_eq!(catalog.len(), 2 * 1 * 2);
/// ```
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    glyphs: Vec<Glyph>,
    font: FontBitmap,
    palette: Palette,
}

impl GlyphCatalog {
    /// Enumerate and precompute all glyphs.
    ///
    /// Produces `P * (P - 1) * C` glyphs when equal pairs are skipped and
    /// `P * P * C` otherwise, for `P` palette entries and `C` codes.
    pub fn build(
        font: &FontBitmap,
        palette: &Palette,
        codes: &CodeSet,
        options: CatalogOptions,
    ) -> Self {
        let masks: Vec<(u8, Vec<bool>)> =
            codes.codes().iter().map(|&c| (c, font.mask(c))).collect();

        let p = palette.len();
        let pairs = if options.skip_equal_color_pairs {
            p * p.saturating_sub(1)
        } else {
            p * p
        };
        let mut glyphs = Vec::with_capacity(pairs * masks.len());

        for bg in 0..p {
            for fg in 0..p {
                if options.skip_equal_color_pairs && bg == fg {
                    continue;
                }
                let (bg_lab, fg_lab) = (palette.oklab(bg), palette.oklab(fg));
                for (code, mask) in &masks {
                    glyphs.push(Glyph {
                        code: *code,
                        background_index: bg,
                        foreground_index: fg,
                        background: palette.color(bg),
                        foreground: palette.color(fg),
                        signature: signature(mask, bg_lab, fg_lab),
                    });
                }
            }
        }

        tracing::debug!(
            glyphs = glyphs.len(),
            colors = p,
            codes = masks.len(),
            cell_height = font.cell_height(),
            "built glyph catalog"
        );

        Self {
            glyphs,
            font: font.clone(),
            palette: palette.clone(),
        }
    }

    /// Validate raw inputs and build a catalog.
    ///
    /// # Errors
    ///
    /// [`GlyphError::Font`] when the byte length is not a non-zero multiple
    /// of 256, [`GlyphError::Palette`] when `colors` is empty. No catalog is
    /// produced in either case.
    pub fn from_raw(
        font_bytes: Vec<u8>,
        colors: &[Srgb],
        codes: &CodeSet,
        options: CatalogOptions,
    ) -> Result<Self, GlyphError> {
        let font = FontBitmap::new(font_bytes)?;
        let palette = Palette::new(colors)?;
        Ok(Self::build(&font, &palette, codes, options))
    }

    /// All glyphs in enumeration order.
    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The font the catalog was built from.
    #[inline]
    pub fn font(&self) -> &FontBitmap {
        &self.font
    }

    /// The palette the catalog was built from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn cell_width(&self) -> usize {
        self.font.cell_width()
    }

    #[inline]
    pub fn cell_height(&self) -> usize {
        self.font.cell_height()
    }
}

fn signature(mask: &[bool], bg: Oklab, fg: Oklab) -> Vec<Oklab> {
    mask.iter().map(|&set| if set { fg } else { bg }).collect()
}
