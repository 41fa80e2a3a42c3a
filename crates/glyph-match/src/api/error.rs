//! Unified error type for the glyph-match public API.
//!
//! [`GlyphError`] wraps every error the crate can produce into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::font::FontError;
use crate::palette::{PaletteError, ParseColorError};

/// Shape or length mismatch between images, grids and signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// Region and glyph signatures differ in length.
    #[error("signature length mismatch: expected {expected}, got {actual}")]
    SignatureLength {
        /// Length of the region signature
        expected: usize,
        /// Length of the glyph signature
        actual: usize,
    },
    /// Pixel buffer length is not `width * height`.
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCount {
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
    /// Image with zero width or height.
    #[error("image dimensions {width}x{height} must be non-zero")]
    EmptyImage {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
    /// Grid with zero columns or rows.
    #[error("grid shape {columns}x{rows} must be non-zero")]
    EmptyGrid {
        /// Columns in the grid
        columns: usize,
        /// Rows in the grid
        rows: usize,
    },
    /// Cell with zero width or height.
    #[error("cell size {width}x{height} must be non-zero")]
    EmptyCell {
        /// Cell width in pixels
        width: usize,
        /// Cell height in pixels
        height: usize,
    },
}

/// Unified error type for the glyph-match public API.
///
/// # Example
///
/// ```
/// use glyph_match::{GlyphError, Palette};
///
/// fn create_palette() -> Result<Palette, GlyphError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Palette validation error (empty, unknown built-in, or parse error)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Font bitmap validation error
    #[error("font error: {0}")]
    Font(#[from] FontError),
    /// Inconsistent image, grid or signature dimensions
    #[error("dimension mismatch: {0}")]
    Dimension(#[from] DimensionError),
    /// Matching was attempted against zero candidate glyphs
    #[error("glyph catalog is empty")]
    EmptyCatalog,
    /// The worker pool for parallel matching could not be started
    #[error("failed to start matching thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl GlyphError {
    /// `true` for errors raised while validating construction inputs
    /// (fonts, palettes, colors).
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            GlyphError::Palette(_) | GlyphError::ParseColor(_) | GlyphError::Font(_)
        )
    }
}
