use crate::error::AppError;
use crate::models::{AppConfig, SourceImage};
use crate::rendering::{render_png, GlyphMap};
use glyph_match::{FontBitmap, GlyphCatalog, GlyphGrid, GlyphMatcher, GridShape};
use std::time::Instant;

/// Rendered output of one image
#[derive(Debug)]
pub struct RenderOutput {
    /// Optimized PNG of the text screen
    pub png: Vec<u8>,
    /// Code and colors per cell
    pub map: GlyphMap,
}

/// High-level render service: builds the glyph catalog once and renders any
/// number of images with it
pub struct RenderService {
    matcher: GlyphMatcher,
    columns: usize,
    rows: Option<usize>,
}

impl RenderService {
    pub fn new(font: &FontBitmap, config: &AppConfig) -> Result<Self, AppError> {
        let palette = config.palette()?;
        let codes = config.code_set()?;

        let started = Instant::now();
        let catalog = GlyphCatalog::build(font, &palette, &codes, config.catalog_options());
        tracing::info!(
            glyphs = catalog.len(),
            colors = palette.len(),
            codes = codes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built glyph catalog"
        );

        Ok(Self {
            matcher: GlyphMatcher::new(catalog).threads(config.threads),
            columns: config.columns,
            rows: config.rows,
        })
    }

    pub fn catalog(&self) -> &GlyphCatalog {
        self.matcher.catalog()
    }

    /// Grid for `image`: configured rows, or rows that keep the aspect ratio
    pub fn grid_shape(&self, image: &SourceImage) -> Result<GridShape, AppError> {
        let shape = match self.rows {
            Some(rows) => GridShape::new(self.columns, rows),
            None => GridShape::fit(
                self.columns,
                image.width,
                image.height,
                self.catalog().cell_width(),
                self.catalog().cell_height(),
            )
            .map_err(glyph_match::GlyphError::from)?,
        };
        Ok(shape)
    }

    /// Match every cell of `image` to a glyph
    pub fn render(&self, image: &SourceImage) -> Result<GlyphGrid<'_>, AppError> {
        let shape = self.grid_shape(image)?;
        let started = Instant::now();
        let grid = self
            .matcher
            .render(&image.pixels, image.width, image.height, shape)?;
        tracing::info!(
            columns = shape.columns,
            rows = shape.rows,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Matched glyphs"
        );
        Ok(grid)
    }

    /// Render `image` to PNG bytes plus its glyph map
    pub fn render_to_png(&self, image: &SourceImage) -> Result<RenderOutput, AppError> {
        let grid = self.render(image)?;
        let png = render_png(
            grid.pixel_width() as u32,
            grid.pixel_height() as u32,
            &grid.to_rgb(),
        )?;
        Ok(RenderOutput {
            png,
            map: GlyphMap::from_grid(&grid),
        })
    }
}
