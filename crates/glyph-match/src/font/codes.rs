//! Explicit sets of character codes to enumerate.

use std::str::FromStr;

use thiserror::Error;

/// Control codes that DOS-era tools cannot print as glyphs:
/// tab, line feed, carriage return and end-of-file.
const CONTROL_CODES: [u8; 4] = [9, 10, 13, 26];

/// Error type for parsing code-set expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodeSetError {
    /// A term is neither a code (0-255) nor a `lo-hi` range.
    #[error("invalid code '{0}' (expected 0-255 or a range like 176-178)")]
    InvalidCode(String),
    /// A range whose start is greater than its end.
    #[error("range {lo}-{hi} is reversed")]
    ReversedRange {
        /// Start of the range
        lo: u8,
        /// End of the range
        hi: u8,
    },
}

/// An ordered, duplicate-free list of character codes.
///
/// The catalog enumerates codes in this order, which only matters for
/// tie-breaking between glyphs with identical scores.
///
/// # Example
///
/// ```
/// use glyph_match::CodeSet;
///
/// let blocks: CodeSet = "176-178,219".parse().unwrap();
/// assert_eq!(blocks.codes(), &[176, 177, 178, 219]);
/// assert_eq!(CodeSet::printable().len(), 252);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSet {
    codes: Vec<u8>,
}

impl CodeSet {
    /// Build from any sequence of codes; later duplicates are dropped.
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Self {
        let mut seen = [false; 256];
        let codes = codes
            .into_iter()
            .filter(|&c| !std::mem::replace(&mut seen[c as usize], true))
            .collect();
        Self { codes }
    }

    /// All 256 codes in ascending order.
    pub fn all() -> Self {
        Self::new(0..=255)
    }

    /// All codes except the control codes 9, 10, 13 and 26.
    pub fn printable() -> Self {
        Self::new((0..=255).filter(|c| !CONTROL_CODES.contains(c)))
    }

    /// The codes in enumeration order.
    #[inline]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CodeSet {
    fn default() -> Self {
        Self::printable()
    }
}

impl FromStr for CodeSet {
    type Err = ParseCodeSetError;

    /// Parse `"all"`, `"printable"`, or a comma-separated list of codes and
    /// inclusive ranges such as `"32-126,176-178,219"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        if s.eq_ignore_ascii_case("printable") {
            return Ok(Self::printable());
        }

        let parse_code = |t: &str| {
            t.trim()
                .parse::<u8>()
                .map_err(|_| ParseCodeSetError::InvalidCode(t.trim().to_string()))
        };

        let mut codes = Vec::new();
        for term in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match term.split_once('-') {
                Some((lo, hi)) => {
                    let (lo, hi) = (parse_code(lo)?, parse_code(hi)?);
                    if lo > hi {
                        return Err(ParseCodeSetError::ReversedRange { lo, hi });
                    }
                    codes.extend(lo..=hi);
                }
                None => codes.push(parse_code(term)?),
            }
        }
        Ok(Self::new(codes))
    }
}
