use nalgebra::DMatrix;

/// A scalar field sampled over a rectangular grid. Row index runs along the y axis and column
/// index along the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    values: DMatrix<f64>,
}

impl ScalarGrid {
    pub fn from_matrix(values: DMatrix<f64>) -> Self {
        Self { values }
    }

    /// Returns `None` when the rows do not all have the same width.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Some(Self {
            values: DMatrix::from_row_slice(rows.len(), ncols, &data),
        })
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Minimum and maximum over the finite samples.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
