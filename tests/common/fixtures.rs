//! Test fixtures: synthetic fonts and images written to temp directories.

use std::path::{Path, PathBuf};

/// Cell height of the block font.
pub const BLOCK_FONT_HEIGHT: usize = 8;

/// Character codes with a known shape in [`block_font`].
pub mod codes {
    /// Light shade: every other pixel of every other row
    pub const LIGHT_SHADE: u8 = 176;
    /// Full block
    pub const FULL: u8 = 219;
    /// Lower half block
    pub const LOWER_HALF: u8 = 220;
    /// Left half block
    pub const LEFT_HALF: u8 = 221;
    /// Right half block
    pub const RIGHT_HALF: u8 = 222;
    /// Upper half block
    pub const UPPER_HALF: u8 = 223;
}

/// An 8x8 font that is blank except for the CP437 block characters.
pub fn block_font() -> Vec<u8> {
    let h = BLOCK_FONT_HEIGHT;
    let mut bytes = vec![0u8; 256 * h];
    let mut set = |code: u8, rows: &dyn Fn(usize) -> u8| {
        for y in 0..h {
            bytes[code as usize * h + y] = rows(y);
        }
    };
    set(codes::LIGHT_SHADE, &|y| if y % 2 == 0 { 0b1010_1010 } else { 0 });
    set(codes::FULL, &|_| 0xFF);
    set(codes::LOWER_HALF, &|y| if y >= h / 2 { 0xFF } else { 0 });
    set(codes::LEFT_HALF, &|_| 0xF0);
    set(codes::RIGHT_HALF, &|_| 0x0F);
    set(codes::UPPER_HALF, &|y| if y < h / 2 { 0xFF } else { 0 });
    bytes
}

/// Write [`block_font`] into `dir` and return its path.
pub fn write_block_font(dir: &Path) -> PathBuf {
    let path = dir.join("blocks.f08");
    std::fs::write(&path, block_font()).unwrap();
    path
}

/// Encode an RGB image as PNG.
pub fn png_rgb(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgb).unwrap();
    }
    buf
}

/// Write a PNG whose pixels come from `color_at(x, y)`.
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color_at: impl Fn(u32, u32) -> [u8; 3],
) -> PathBuf {
    let rgb: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| color_at(x, y))
        .collect();
    let path = dir.join(name);
    std::fs::write(&path, png_rgb(width, height, &rgb)).unwrap();
    path
}

/// CGA colors used by the fixtures.
pub mod cga {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 170];
    pub const RED: [u8; 3] = [170, 0, 0];
    pub const BROWN: [u8; 3] = [170, 85, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];

    pub const BLUE_INDEX: usize = 1;
    pub const RED_INDEX: usize = 4;
    pub const WHITE_INDEX: usize = 15;
}
