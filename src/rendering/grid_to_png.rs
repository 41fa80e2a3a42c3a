//! PNG export of rendered text screens.

use std::io::Cursor;

use crate::error::AppError;

/// Encode an 8-bit RGB buffer as PNG and recompress it with oxipng.
pub fn render_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, AppError> {
    let png_bytes = encode_png(width, height, rgb)?;

    // Re-compress with oxipng; keep the fast encoding if that fails
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::warn!(%e, "PNG optimization failed, writing unoptimized image");
        png_bytes
    });
    Ok(optimized)
}

/// Encode RGB pixel data as a PNG with fast settings.
pub fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, AppError> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(AppError::PngEncode(format!(
            "buffer holds {} bytes, expected {expected} for {width}x{height}",
            rgb.len()
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
