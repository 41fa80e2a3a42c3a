//! Grid partitioning and nearest-pixel region sampling.

use super::samples::SourceSamples;
use crate::api::DimensionError;
use crate::color::Oklab;

/// One grid cell of the source image with its perceptual signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub column: usize,
    pub row: usize,
    /// Row-major Oklab colors, `cell_width * cell_height` long
    pub signature: Vec<Oklab>,
}

/// Columns × rows of the output text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Choose the row count for `columns` so that cells of
    /// `cell_width × cell_height` pixels keep the image's aspect ratio.
    ///
    /// `rows = floor(image_height / (cell_height / cell_width) / (image_width / columns))`,
    /// never less than 1.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_match::GridShape;
    ///
    /// // 640x480 image, 80 columns of 8x16 cells
    /// let shape = GridShape::fit(80, 640, 480, 8, 16).unwrap();
    /// assert_eq!(shape, GridShape::new(80, 30));
    /// ```
    pub fn fit(
        columns: usize,
        image_width: usize,
        image_height: usize,
        cell_width: usize,
        cell_height: usize,
    ) -> Result<Self, DimensionError> {
        if image_width == 0 || image_height == 0 {
            return Err(DimensionError::EmptyImage {
                width: image_width,
                height: image_height,
            });
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(DimensionError::EmptyCell {
                width: cell_width,
                height: cell_height,
            });
        }
        if columns == 0 {
            return Err(DimensionError::EmptyGrid { columns, rows: 0 });
        }
        let rows = (image_height * cell_width * columns) / (cell_height * image_width);
        Ok(Self::new(columns, rows.max(1)))
    }

    /// Number of cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.columns * self.rows
    }
}

/// Partition the image into `columns × rows` cells and sample each.
///
/// Regions come out row-major (row outer, column inner). For local pixel
/// `(x, y)` of the cell at `(column, row)` the source pixel is
///
/// ```text
/// gx = column * cell_width + x        px = gx * src_w / (columns * cell_width)
/// gy = row * cell_height + y          py = gy * src_h / (rows * cell_height)
/// ```
///
/// in integer arithmetic (floor). No averaging is done.
///
/// # Errors
///
/// [`DimensionError::EmptyGrid`] or [`DimensionError::EmptyCell`] for zero
/// sizes.
pub fn sample_regions(
    samples: &SourceSamples,
    columns: usize,
    rows: usize,
    cell_width: usize,
    cell_height: usize,
) -> Result<Vec<Region>, DimensionError> {
    if columns == 0 || rows == 0 {
        return Err(DimensionError::EmptyGrid { columns, rows });
    }
    if cell_width == 0 || cell_height == 0 {
        return Err(DimensionError::EmptyCell {
            width: cell_width,
            height: cell_height,
        });
    }

    let grid_w = columns * cell_width;
    let grid_h = rows * cell_height;
    let (src_w, src_h) = (samples.width(), samples.height());

    // Lookup tables: each grid pixel column/row maps to one source column/row
    let src_x: Vec<usize> = (0..grid_w).map(|gx| gx * src_w / grid_w).collect();
    let src_y: Vec<usize> = (0..grid_h).map(|gy| gy * src_h / grid_h).collect();

    let mut regions = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        for column in 0..columns {
            let mut signature = Vec::with_capacity(cell_width * cell_height);
            for y in 0..cell_height {
                let py = src_y[row * cell_height + y];
                for x in 0..cell_width {
                    signature.push(samples.get(src_x[column * cell_width + x], py));
                }
            }
            regions.push(Region {
                column,
                row,
                signature,
            });
        }
    }
    Ok(regions)
}
