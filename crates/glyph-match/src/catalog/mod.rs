//! Glyph enumeration and signature precomputation.

mod catalog;
mod glyph;

pub use catalog::{CatalogOptions, GlyphCatalog};
pub use glyph::Glyph;
