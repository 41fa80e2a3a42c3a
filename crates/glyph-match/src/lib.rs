#![allow(clippy::module_inception)]

//! glyph-match: perceptual glyph selection for text-mode art
//!
//! This library picks, for every cell of a character grid, the glyph of an
//! 8-pixel-wide bitmap font and the foreground/background pair from a fixed
//! palette whose rendering looks closest to the matching region of a source
//! image.
//!
//! # Quick Start
//!
//! Build a [`GlyphCatalog`] once, then hand it to a [`GlyphMatcher`]:
//!
//! ```
//! use glyph_match::{
//!     CatalogOptions, CodeSet, FontBitmap, GlyphCatalog, GlyphMatcher, GridShape, Palette, Srgb,
//! };
//!
//! let font = FontBitmap::new(vec![0u8; 256 * 8]).unwrap();
//! let palette = Palette::builtin("cga").unwrap();
//! let codes = CodeSet::new([32]);
//! let catalog = GlyphCatalog::build(&font, &palette, &codes, CatalogOptions::default());
//!
//! let matcher = GlyphMatcher::new(catalog);
//! let pixels = vec![Srgb::from_u8(255, 255, 255); 8 * 8];
//! let grid = matcher.render(&pixels, 8, 8, GridShape::new(1, 1)).unwrap();
//!
//! assert_eq!(grid.get(0, 0).unwrap().background_index, 15);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! palette + font + codes ──> GlyphCatalog (built once, reusable)
//!                                  │
//! pixels ──> SourceSamples ──> sample_regions ──> match_all ──> GlyphGrid
//! ```
//!
//! Matching is a full cross product: `regions × glyphs × pixels per cell`
//! Oklab distances. [`match_all`] spreads regions over a rayon pool; results
//! do not depend on the thread count.
//!
//! # Color Science
//!
//! Signatures are compared in Oklab (Björn Ottosson, 2020), where Euclidean
//! distance tracks perceived color difference. A glyph's score against a
//! region is the mean of the per-pixel distances, and the lowest score wins.
//! Ties go to the glyph enumerated first.
//!
//! The sRGB transfer functions are the exact IEC 61966-2-1 formulas, so every
//! 8-bit grey and the primaries survive sRGB → Oklab → sRGB unchanged.

pub mod api;
pub mod catalog;
pub mod color;
pub mod font;
pub mod matcher;
pub mod output;
pub mod palette;
pub mod sample;


pub use api::{DimensionError, GlyphError, GlyphMatcher};
pub use catalog::{CatalogOptions, Glyph, GlyphCatalog};
pub use color::{LinearRgb, Oklab, Srgb};
pub use font::{CodeSet, FontBitmap, FontError, ParseCodeSetError, CELL_WIDTH};
pub use matcher::{find_best_glyph, match_all, score, Match};
pub use output::GlyphGrid;
pub use palette::{Palette, PaletteError, ParseColorError};
pub use sample::{sample_regions, GridShape, Region, SourceSamples};
