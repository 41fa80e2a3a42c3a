//! Source image sampling into glyph-sized regions.

mod region;
mod samples;

pub use region::{sample_regions, GridShape, Region};
pub use samples::SourceSamples;
