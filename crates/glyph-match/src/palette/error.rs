//! Error types for palette operations

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    Empty,
    /// Invalid hex color string at the given position
    #[error("invalid color at index {index}: {source}")]
    ParseColor {
        /// Position of the offending entry
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
    /// No built-in palette with this name
    #[error("unknown palette '{0}'")]
    UnknownBuiltin(String),
}
