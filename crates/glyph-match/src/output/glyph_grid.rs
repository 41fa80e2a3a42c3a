//! GlyphGrid: the chosen glyph for every cell of a text grid.
//!
//! [`GlyphGrid`] holds references into the [`GlyphCatalog`] it was matched
//! against, so the font and palette needed to draw it travel with it.

use crate::catalog::{Glyph, GlyphCatalog};
use crate::matcher::Match;
use crate::sample::GridShape;

/// The canonical output of the matching pipeline.
///
/// Stores one glyph per cell in row-major order together with the grid
/// shape. Two output forms are derived on demand:
///
/// - [`codes()`](GlyphGrid::codes): the character code of every cell
/// - [`to_rgb()`](GlyphGrid::to_rgb): the rendered text screen as RGB bytes
///
/// # Example
///
/// ```
/// use glyph_match::{
///     CatalogOptions, CodeSet, FontBitmap, GlyphCatalog, GlyphMatcher, GridShape, Palette, Srgb,
/// };
///
/// let font = FontBitmap::new(vec![0u8; 256]).unwrap();
/// let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
/// let codes = CodeSet::new([32]);
/// let catalog = GlyphCatalog::build(&font, &palette, &codes, CatalogOptions::default());
///
/// let matcher = GlyphMatcher::new(catalog);
/// let pixels = vec![Srgb::from_u8(250, 250, 250); 4];
/// let grid = matcher.render(&pixels, 2, 2, GridShape::new(2, 1)).unwrap();
///
/// assert_eq!(grid.codes(), vec![32, 32]);
/// assert_eq!(grid.get(1, 0).unwrap().background_index, 1);
/// assert_eq!(grid.to_rgb().len(), grid.pixel_width() * grid.pixel_height() * 3);
/// ```
#[derive(Debug, Clone)]
pub struct GlyphGrid<'a> {
    shape: GridShape,
    cells: Vec<&'a Glyph>,
    catalog: &'a GlyphCatalog,
}

impl<'a> GlyphGrid<'a> {
    /// Assemble a grid from matcher output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `matches` holds exactly one row-major entry per cell.
    pub fn new(shape: GridShape, matches: &[Match<'a>], catalog: &'a GlyphCatalog) -> Self {
        debug_assert_eq!(
            matches.len(),
            shape.cells(),
            "match count ({}) must equal columns * rows ({}x{})",
            matches.len(),
            shape.columns,
            shape.rows,
        );
        debug_assert!(matches
            .iter()
            .enumerate()
            .all(|(i, m)| m.row * shape.columns + m.column == i));
        Self {
            shape,
            cells: matches.iter().map(|m| m.glyph).collect(),
            catalog,
        }
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.shape.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Chosen glyphs, row-major.
    #[inline]
    pub fn cells(&self) -> &[&'a Glyph] {
        &self.cells
    }

    /// The glyph at `(column, row)`, or `None` outside the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<&'a Glyph> {
        if column >= self.shape.columns || row >= self.shape.rows {
            return None;
        }
        self.cells.get(row * self.shape.columns + column).copied()
    }

    /// The catalog the glyphs belong to.
    #[inline]
    pub fn catalog(&self) -> &'a GlyphCatalog {
        self.catalog
    }

    /// Rendered width in pixels.
    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.shape.columns * self.catalog.cell_width()
    }

    /// Rendered height in pixels.
    #[inline]
    pub fn pixel_height(&self) -> usize {
        self.shape.rows * self.catalog.cell_height()
    }

    /// Character codes, row-major.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|g| g.code).collect()
    }

    /// Draw every glyph at its grid position.
    ///
    /// Returns a flat `[R, G, B, ...]` buffer of
    /// `pixel_width() * pixel_height() * 3` bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        let font = self.catalog.font();
        let (cw, ch) = (font.cell_width(), font.cell_height());
        let stride = self.pixel_width() * 3;
        let mut rgb = vec![0u8; stride * self.pixel_height()];

        for (i, glyph) in self.cells.iter().enumerate() {
            let (column, row) = (i % self.shape.columns, i / self.shape.columns);
            let cell = glyph.rasterize(font);
            for (y, line) in cell.chunks_exact(cw * 3).enumerate() {
                let start = (row * ch + y) * stride + column * cw * 3;
                rgb[start..start + cw * 3].copy_from_slice(line);
            }
        }
        rgb
    }
}
