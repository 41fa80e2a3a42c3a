//! Whole-image matching across a rayon thread pool.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::score::find_best_glyph;
use crate::api::GlyphError;
use crate::catalog::{Glyph, GlyphCatalog};
use crate::sample::Region;

/// The glyph chosen for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub column: usize,
    pub row: usize,
    pub glyph: &'a Glyph,
}

/// Pick the best glyph for every region.
///
/// Results are in region order. `threads == 1` runs on the calling thread;
/// any other value runs on a dedicated rayon pool of that many workers
/// (`0` lets rayon choose). The output does not depend on the thread count.
///
/// # Errors
///
/// [`GlyphError::EmptyCatalog`] for a catalog without glyphs, a dimension
/// error when region and glyph cells differ in size, or a pool startup
/// failure.
pub fn match_all<'a>(
    regions: &[Region],
    catalog: &'a GlyphCatalog,
    threads: usize,
) -> Result<Vec<Match<'a>>, GlyphError> {
    if catalog.is_empty() {
        return Err(GlyphError::EmptyCatalog);
    }
    let glyphs = catalog.glyphs();
    let pick = |region: &Region| {
        find_best_glyph(region, glyphs).map(|glyph| Match {
            column: region.column,
            row: region.row,
            glyph,
        })
    };

    tracing::debug!(
        regions = regions.len(),
        glyphs = glyphs.len(),
        threads,
        "matching regions"
    );

    if threads == 1 {
        return regions.iter().map(pick).collect();
    }

    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    pool.install(|| regions.par_iter().map(pick).collect())
}
