//! Source image pixels converted to Oklab once per image.

use crate::api::DimensionError;
use crate::color::{Oklab, Srgb};

/// A width × height grid of Oklab colors, one per source pixel.
#[derive(Debug, Clone)]
pub struct SourceSamples {
    width: usize,
    height: usize,
    lab: Vec<Oklab>,
}

impl SourceSamples {
    /// Convert a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// [`DimensionError::EmptyImage`] for a zero dimension and
    /// [`DimensionError::PixelCount`] when `pixels.len() != width * height`.
    pub fn new(pixels: &[Srgb], width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::EmptyImage { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DimensionError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            lab: pixels.iter().map(|&p| Oklab::from(p)).collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The Oklab color at pixel `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Oklab {
        self.lab[y * self.width + x]
    }
}
