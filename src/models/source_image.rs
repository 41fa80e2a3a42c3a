use glyph_match::Srgb;

/// A decoded raster image, row-major, one sRGB color per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Srgb>,
}

impl SourceImage {
    pub fn new(width: usize, height: usize, pixels: Vec<Srgb>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Uniformly colored image, mostly useful in tests.
    pub fn solid(width: usize, height: usize, color: Srgb) -> Self {
        Self::new(width, height, vec![color; width * height])
    }
}
