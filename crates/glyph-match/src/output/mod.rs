//! Output types for the matching pipeline.
//!
//! [`GlyphGrid`] is the canonical result: the chosen glyph per cell, from
//! which character codes and a rendered RGB screen are derived.

mod glyph_grid;

pub use glyph_grid::GlyphGrid;
