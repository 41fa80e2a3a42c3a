//! Ansify - text-mode art from images
//!
//! Loads images and bitmap fonts, matches every character cell against a
//! palette-aware glyph catalog, and exports the result as PNG and JSON.
//! This library exposes modules for integration testing.

pub mod error;
pub mod loaders;
pub mod models;
pub mod rendering;
pub mod services;
