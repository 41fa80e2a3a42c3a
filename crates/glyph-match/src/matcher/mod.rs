//! Nearest-glyph search.

mod match_all;
mod score;

pub use match_all::{match_all, Match};
pub use score::{find_best_glyph, score};
