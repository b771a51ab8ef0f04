//! Row and per-row column cumulative distributions over pixel darkness.

use image::GrayImage;

/// Conditional CDFs of an intensity field.
///
/// `rows[y]` is the darkness mass of rows `0..=y`; `columns[y][x]` is the
/// darkness mass of columns `0..=x` within row `y`. Darkness is
/// `255 - luminance`, so white pixels carry no weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cdfs {
    width: usize,
    height: usize,
    rows: Vec<u64>,
    columns: Vec<Vec<u64>>,
}

impl Cdfs {
    pub fn build(image: &GrayImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut rows = Vec::with_capacity(height);
        let mut columns = Vec::with_capacity(height);
        let mut row_acc = 0u64;

        for y in 0..image.height() {
            let mut col_acc = 0u64;
            let cdf: Vec<u64> = (0..image.width())
                .map(|x| {
                    col_acc += darkness(image.get_pixel(x, y).0[0]);
                    col_acc
                })
                .collect();
            row_acc += col_acc;
            rows.push(row_acc);
            columns.push(cdf);
        }

        Self { width, height, rows, columns }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the field has no pixels to sample from.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    pub fn columns(&self, row: usize) -> &[u64] {
        &self.columns[row]
    }

    /// Total darkness of the whole field.
    pub fn row_mass(&self) -> u64 {
        self.rows.last().copied().unwrap_or(0)
    }

    /// Total darkness of a single row.
    pub fn column_mass(&self, row: usize) -> u64 {
        self.columns[row].last().copied().unwrap_or(0)
    }
}

#[inline]
fn darkness(luma: u8) -> u64 {
    u64::from(255 - luma)
}
