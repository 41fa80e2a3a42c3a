//! A single renderable glyph: character code plus color pair.

use crate::color::{Oklab, Srgb};
use crate::font::FontBitmap;

/// One (background, foreground, code) combination with its precomputed
/// perceptual signature.
///
/// The signature holds one [`Oklab`] color per cell pixel in row-major order:
/// the foreground color where the font bit is set, the background elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Character code in the font
    pub code: u8,
    /// Palette index of the background color
    pub background_index: usize,
    /// Palette index of the foreground color
    pub foreground_index: usize,
    /// Background display color
    pub background: Srgb,
    /// Foreground display color
    pub foreground: Srgb,
    /// Row-major per-pixel Oklab colors, `cell_width * cell_height` long
    pub signature: Vec<Oklab>,
}

impl Glyph {
    /// Draw the glyph as display pixels.
    ///
    /// Returns a flat `[R, G, B, R, G, B, ...]` buffer of
    /// `font.cell_area() * 3` bytes in row-major order.
    pub fn rasterize(&self, font: &FontBitmap) -> Vec<u8> {
        let bg = self.background.to_bytes();
        let fg = self.foreground.to_bytes();
        font.mask(self.code)
            .into_iter()
            .flat_map(|set| if set { fg } else { bg })
            .collect()
    }
}
