//! Palette types and utilities
//!
//! This module provides the ordered display palette used to enumerate glyph
//! color pairs, the built-in retro palettes, and the related error types.

mod error;
mod palette;
pub mod presets;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
