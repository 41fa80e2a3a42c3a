//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use ansify::models::SourceImage;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG and decode them
pub fn assert_png(bytes: &[u8]) -> SourceImage {
    assert!(
        bytes.starts_with(&PNG_MAGIC),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    ansify::loaders::decode_png(std::io::Cursor::new(bytes)).expect("PNG should decode")
}

/// Assert the pixel at `(x, y)` has the expected color
pub fn assert_pixel(image: &SourceImage, x: usize, y: usize, expected: [u8; 3]) {
    assert_eq!(
        image.pixels[y * image.width + x].to_bytes(),
        expected,
        "pixel ({x}, {y})"
    );
}

/// Assert every pixel inside the rectangle has the expected color
pub fn assert_rect(
    image: &SourceImage,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
    expected: [u8; 3],
) {
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            assert_pixel(image, x, y, expected);
        }
    }
}
