//! GlyphMatcher façade: the primary ergonomic entry point for the crate.
//!
//! [`GlyphMatcher`] owns a prebuilt [`GlyphCatalog`] and runs the
//! sample → match → grid pipeline for any number of images.

use super::error::GlyphError;
use crate::catalog::GlyphCatalog;
use crate::color::Srgb;
use crate::matcher::match_all;
use crate::output::GlyphGrid;
use crate::sample::{sample_regions, GridShape, SourceSamples};

/// High-level glyph matcher.
///
/// # Design
///
/// - Constructor requires a [`GlyphCatalog`], so the expensive enumeration
///   happens exactly once
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so the matcher is reusable
///   across images
///
/// # Example
///
/// ```
/// use glyph_match::{
///     CatalogOptions, CodeSet, FontBitmap, GlyphCatalog, GlyphMatcher, GridShape, Palette, Srgb,
/// };
///
/// let font = FontBitmap::new(vec![0u8; 256 * 8]).unwrap();
/// let palette = Palette::builtin("cga").unwrap();
/// let codes = CodeSet::new([32]);
/// let catalog = GlyphCatalog::build(&font, &palette, &codes, CatalogOptions::default());
///
/// let matcher = GlyphMatcher::new(catalog).threads(1);
/// let pixels = vec![Srgb::from_u8(0, 0, 170); 16 * 8];
/// let grid = matcher.render(&pixels, 16, 8, GridShape::new(2, 1)).unwrap();
///
/// assert_eq!(grid.columns(), 2);
/// assert!(grid.cells().iter().all(|g| g.background_index == 1));
/// ```
pub struct GlyphMatcher {
    catalog: GlyphCatalog,
    threads: usize,
}

impl GlyphMatcher {
    /// Create a matcher over `catalog`. Defaults to rayon's thread count.
    pub fn new(catalog: GlyphCatalog) -> Self {
        Self {
            catalog,
            threads: 0,
        }
    }

    /// Set the number of matching threads (`0` = rayon default, `1` = run
    /// on the calling thread).
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[inline]
    pub fn catalog(&self) -> &GlyphCatalog {
        &self.catalog
    }

    /// Match raw sRGB pixels against the catalog.
    ///
    /// Applies the full pipeline:
    /// 1. Convert pixels to Oklab ([`SourceSamples`])
    /// 2. Partition into `shape` cells of the catalog's cell size
    /// 3. Pick the best glyph per cell
    /// 4. Wrap in [`GlyphGrid`]
    pub fn render(
        &self,
        pixels: &[Srgb],
        width: usize,
        height: usize,
        shape: GridShape,
    ) -> Result<GlyphGrid<'_>, GlyphError> {
        let samples = SourceSamples::new(pixels, width, height)?;
        let regions = sample_regions(
            &samples,
            shape.columns,
            shape.rows,
            self.catalog.cell_width(),
            self.catalog.cell_height(),
        )?;
        let matches = match_all(&regions, &self.catalog, self.threads)?;
        Ok(GlyphGrid::new(shape, &matches, &self.catalog))
    }
}
