//! 8-pixel-wide bitmap fonts with 256 character codes.

use thiserror::Error;

/// Every font cell is exactly 8 pixels wide (one byte per row).
pub const CELL_WIDTH: usize = 8;

/// Number of character codes in a font.
pub const CODE_COUNT: usize = 256;

/// Error type for font bitmap construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    /// Byte length is zero or not a multiple of 256.
    #[error("font bitmap length {len} is not a non-zero multiple of 256")]
    InvalidLength {
        /// Length of the rejected byte sequence
        len: usize,
    },
}

/// A raw bitmap font: 256 codes, each `cell_height` bytes, one byte per
/// pixel row with the most significant bit as the leftmost pixel.
///
/// This is the layout of the classic `.F08`/`.F14`/`.F16` console font dumps.
///
/// # Example
///
/// ```
/// use glyph_match::FontBitmap;
///
/// let font = FontBitmap::new(vec![0u8; 256 * 8]).unwrap();
/// assert_eq!(font.cell_height(), 8);
/// assert!(FontBitmap::new(vec![0u8; 300]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontBitmap {
    bytes: Vec<u8>,
    cell_height: usize,
}

impl FontBitmap {
    /// Wrap raw font bytes.
    ///
    /// # Errors
    ///
    /// [`FontError::InvalidLength`] unless the length is a non-zero multiple
    /// of 256.
    pub fn new(bytes: Vec<u8>) -> Result<Self, FontError> {
        let len = bytes.len();
        if len == 0 || len % CODE_COUNT != 0 {
            return Err(FontError::InvalidLength { len });
        }
        Ok(Self {
            bytes,
            cell_height: len / CODE_COUNT,
        })
    }

    /// Cell width in pixels (always 8).
    #[inline]
    pub fn cell_width(&self) -> usize {
        CELL_WIDTH
    }

    /// Cell height in pixels (`bytes / 256`).
    #[inline]
    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Pixels per cell.
    #[inline]
    pub fn cell_area(&self) -> usize {
        CELL_WIDTH * self.cell_height
    }

    /// The `cell_height` row bytes of character `code`.
    #[inline]
    pub fn pattern(&self, code: u8) -> &[u8] {
        let start = code as usize * self.cell_height;
        &self.bytes[start..start + self.cell_height]
    }

    /// Row-major foreground mask of character `code`, `cell_area()` long.
    ///
    /// `true` marks a foreground pixel (bit set).
    pub fn mask(&self, code: u8) -> Vec<bool> {
        self.pattern(code)
            .iter()
            .flat_map(|&row| (0..CELL_WIDTH).map(move |x| row & (0x80 >> x) != 0))
            .collect()
    }
}
