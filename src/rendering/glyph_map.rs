//! JSON description of a rendered grid: which code and colors sit in each cell.

use glyph_match::GlyphGrid;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Serializable glyph map.
///
/// `background` and `foreground` are indices into `palette`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphMap {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: usize,
    pub cell_height: usize,
    /// Palette as lowercase `#rrggbb` strings
    pub palette: Vec<String>,
    /// One entry per cell, row-major
    pub cells: Vec<GlyphMapCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphMapCell {
    pub column: usize,
    pub row: usize,
    pub code: u8,
    pub background: usize,
    pub foreground: usize,
}

impl GlyphMap {
    pub fn from_grid(grid: &GlyphGrid<'_>) -> Self {
        let catalog = grid.catalog();
        let columns = grid.columns();
        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(i, glyph)| GlyphMapCell {
                column: i % columns,
                row: i / columns,
                code: glyph.code,
                background: glyph.background_index,
                foreground: glyph.foreground_index,
            })
            .collect();

        Self {
            columns,
            rows: grid.rows(),
            cell_width: catalog.cell_width(),
            cell_height: catalog.cell_height(),
            palette: catalog.palette().colors().iter().map(|c| c.to_hex()).collect(),
            cells,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
