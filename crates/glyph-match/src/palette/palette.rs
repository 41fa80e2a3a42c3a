//! Palette struct with precomputed perceptual colors.

use std::str::FromStr;

use super::error::PaletteError;
use super::presets::BUILTIN_PALETTES;
use crate::color::{Oklab, Srgb};

/// An ordered, fixed list of display colors.
///
/// Entries need not be distinct. Index order determines the order in which
/// glyph color pairs are enumerated and carries no other meaning.
///
/// # Precomputation
///
/// The Oklab form of every entry is computed once at construction, so a
/// catalog build converts each palette color exactly once no matter how many
/// glyphs use it.
///
/// # Example
///
/// ```
/// use glyph_match::{Palette, Srgb};
///
/// let colors = [Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)];
/// let palette = Palette::new(&colors).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    srgb: Vec<Srgb>,
    oklab: Vec<Oklab>,
}

impl Palette {
    /// Create a new palette from sRGB colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let srgb = colors.to_vec();
        let oklab = srgb.iter().map(|&c| Oklab::from(c)).collect();

        Ok(Self { srgb, oklab })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_match::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFF", "#F00"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert_eq!(palette.color(2).to_bytes(), [255, 0, 0]);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let srgb = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Srgb::from_str(s.as_ref())
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&srgb)
    }

    /// Look up a built-in palette by name (case-insensitive).
    ///
    /// Available names are listed by [`Palette::builtin_names()`].
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_match::Palette;
    ///
    /// let cga = Palette::builtin("CGA").unwrap();
    /// assert_eq!(cga.len(), 16);
    /// ```
    pub fn builtin(name: &str) -> Result<Self, PaletteError> {
        let (_, colors) = BUILTIN_PALETTES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| PaletteError::UnknownBuiltin(name.to_string()))?;
        let srgb: Vec<Srgb> = colors.iter().map(|&c| Srgb::from_bytes(c)).collect();
        Palette::new(&srgb)
    }

    /// Names of the built-in palettes.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_PALETTES.iter().map(|(name, _)| *name)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// The display color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.srgb[idx]
    }

    /// The precomputed Oklab color at `idx`.
    #[inline]
    pub fn oklab(&self, idx: usize) -> Oklab {
        self.oklab[idx]
    }

    /// All display colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.srgb
    }
}
