//! Bitmap fonts and the character codes drawn from them.

mod bitmap;
mod codes;

pub use bitmap::{FontBitmap, FontError, CELL_WIDTH, CODE_COUNT};
pub use codes::{CodeSet, ParseCodeSetError};
