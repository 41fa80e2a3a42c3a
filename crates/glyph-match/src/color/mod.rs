//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between display (sRGB), linear-light, and perceptual (Oklab) color spaces.
//!
//! # Color Spaces
//!
//! - **Srgb**: Gamma-encoded display color. Palettes and image pixels use it.
//! - **LinearRgb**: Linear light intensity, the input of the Oklab matrices.
//! - **Oklab**: Perceptually uniform space. Glyph and region signatures use it.
//!
//! # Example
//!
//! ```
//! use glyph_match::{Oklab, Srgb};
//!
//! let red = Srgb::from_u8(255, 0, 0);
//! let lab = Oklab::from(red);
//! assert_eq!(Srgb::from(lab).to_bytes(), [255, 0, 0]);
//! ```

mod linear_rgb;
mod oklab;
mod srgb;
mod transfer;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use srgb::Srgb;
