//! Public API for the glyph-match crate.
//!
//! This module provides the high-level API: the [`GlyphMatcher`] façade and
//! the [`GlyphError`] unified error type.

mod builder;
mod error;

pub use builder::GlyphMatcher;
pub use error::{DimensionError, GlyphError};
