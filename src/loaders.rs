//! Reading fonts and images from disk.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use glyph_match::{FontBitmap, GlyphError, Srgb};

use crate::error::AppError;
use crate::models::SourceImage;

/// Load a raw 8-pixel-wide bitmap font (`.F08`, `.F14`, `.F16` dumps).
pub fn load_font(path: &Path) -> Result<FontBitmap, AppError> {
    let bytes = std::fs::read(path)?;
    let font = FontBitmap::new(bytes).map_err(GlyphError::from)?;
    tracing::debug!(
        path = %path.display(),
        cell_height = font.cell_height(),
        "Loaded font"
    );
    Ok(font)
}

/// Load a PNG image from disk.
pub fn load_image(path: &Path) -> Result<SourceImage, AppError> {
    let image = decode_png(BufReader::new(File::open(path)?))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

/// Decode a PNG stream into sRGB pixels.
///
/// Palette and low-bit-depth images are expanded, 16-bit channels are
/// stripped to 8 bits, and transparency is composited against white.
pub fn decode_png<R: Read>(reader: R) -> Result<SourceImage, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedImage(format!(
            "{:?} at {:?} bits after expansion",
            info.color_type, info.bit_depth
        )));
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        other => {
            return Err(AppError::UnsupportedImage(format!(
                "{other:?} was not expanded"
            )))
        }
    };

    Ok(SourceImage::new(
        info.width as usize,
        info.height as usize,
        rgba_to_srgb(&rgba),
    ))
}

/// Convert RGBA pixel data to Srgb, alpha-compositing against white.
pub fn rgba_to_srgb(rgba_data: &[u8]) -> Vec<Srgb> {
    rgba_data
        .chunks_exact(4)
        .map(|pixel| {
            let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
            if a == 255 {
                Srgb::from_u8(r, g, b)
            } else if a == 0 {
                Srgb::from_u8(255, 255, 255)
            } else {
                // Alpha composite against white
                let af = a as u16;
                let cr = ((r as u16 * af + 255 * (255 - af)) / 255) as u8;
                let cg = ((g as u16 * af + 255 * (255 - af)) / 255) as u8;
                let cb = ((b as u16 * af + 255 * (255 - af)) / 255) as u8;
                Srgb::from_u8(cr, cg, cb)
            }
        })
        .collect()
}
