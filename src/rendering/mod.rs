pub mod glyph_map;
pub mod grid_to_png;

pub use glyph_map::{GlyphMap, GlyphMapCell};
pub use grid_to_png::{encode_png, render_png};
