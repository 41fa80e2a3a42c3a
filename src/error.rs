use glyph_match::{GlyphError, ParseCodeSetError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] png::DecodingError),

    #[error("Unsupported image format: {0}")]
    UnsupportedImage(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Invalid code set: {0}")]
    Codes(#[from] ParseCodeSetError),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glyph matching error: {0}")]
    Glyph(#[from] GlyphError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_match::{FontError, PaletteError};

    #[test]
    fn test_app_error_unsupported_image() {
        let error = AppError::UnsupportedImage("16-bit grayscale".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported image format: 16-bit grayscale"
        );
    }

    #[test]
    fn test_app_error_unknown_palette() {
        let error = AppError::UnknownPalette("vga".to_string());
        assert_eq!(error.to_string(), "Unknown palette: vga");
    }

    #[test]
    fn test_app_error_png_encode() {
        let error = AppError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_app_error_from_glyph_error() {
        let glyph_error = GlyphError::from(FontError::InvalidLength { len: 300 });
        let app_error: AppError = glyph_error.into();
        match app_error {
            AppError::Glyph(ref e) => assert!(e.is_construction()),
            _ => panic!("Expected Glyph variant"),
        }
        assert_eq!(
            app_error.to_string(),
            "Glyph matching error: font error: font bitmap length 300 is not a non-zero multiple of 256"
        );
    }

    #[test]
    fn test_app_error_from_palette_error() {
        let app_error: AppError = GlyphError::from(PaletteError::Empty).into();
        assert_eq!(
            app_error.to_string(),
            "Glyph matching error: palette error: palette cannot be empty"
        );
    }

    #[test]
    fn test_app_error_from_codes() {
        let err = "x".parse::<glyph_match::CodeSet>().unwrap_err();
        let app_error: AppError = err.into();
        assert!(app_error.to_string().starts_with("Invalid code set: "));
    }
}
