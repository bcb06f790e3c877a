//! Validated rectangular grid of normalized heights.

use crate::error::{MeshError, Result};

/// An h×w grid of heights in `[0, 1]`, stored row-major.
///
/// Every constructor validates shape and range, so a `HeightField` that
/// exists is always at least 2×2 and free of NaN/infinite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl HeightField {
    /// Build from a row-major sample buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(MeshError::TooSmall { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MeshError::DataLength {
                expected: rows * cols,
                got: data.len(),
            });
        }
        for (idx, &value) in data.iter().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            if !value.is_finite() {
                return Err(MeshError::NonFinite { row, col });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(MeshError::OutOfRange { row, col, value });
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows; all rows must have equal length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MeshError::RaggedRow {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// Build by evaluating `f(row, col)` at every grid point.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_vec(rows, cols, data)
    }

    /// Number of rows (h).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (w).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Height at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let hf = HeightField::from_rows(&[[0.0, 0.25, 0.5], [0.75, 1.0, 0.0]]).unwrap();
        assert_eq!(hf.rows(), 2);
        assert_eq!(hf.cols(), 3);
        assert_eq!(hf.get(1, 1), 1.0);
        assert_eq!([hf.get(0, 0), hf.get(0, 1), hf.get(0, 2)], [0.0, 0.25, 0.5]);
    }

    #[test]
    fn test_too_small() {
        let err = HeightField::from_rows(&[[0.5, 0.5]]).unwrap_err();
        assert_eq!(err, MeshError::TooSmall { rows: 1, cols: 2 });

        let err = HeightField::from_rows(&[vec![0.5], vec![0.5]]).unwrap_err();
        assert_eq!(err, MeshError::TooSmall { rows: 2, cols: 1 });

        let empty: [Vec<f64>; 0] = [];
        let err = HeightField::from_rows(&empty).unwrap_err();
        assert_eq!(err, MeshError::TooSmall { rows: 0, cols: 0 });
    }

    #[test]
    fn test_ragged_rows() {
        let err = HeightField::from_rows(&[vec![0.0, 0.0], vec![0.0]]).unwrap_err();
        assert_eq!(
            err,
            MeshError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_data_length() {
        let err = HeightField::from_vec(2, 2, vec![0.0; 3]).unwrap_err();
        assert_eq!(err, MeshError::DataLength { expected: 4, got: 3 });
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = HeightField::from_rows(&[[0.0, f64::NAN], [0.0, 0.0]]).unwrap_err();
        assert_eq!(err, MeshError::NonFinite { row: 0, col: 1 });

        let err = HeightField::from_rows(&[[0.0, 0.0], [f64::INFINITY, 0.0]]).unwrap_err();
        assert_eq!(err, MeshError::NonFinite { row: 1, col: 0 });
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = HeightField::from_rows(&[[0.0, 0.0], [0.0, 1.5]]).unwrap_err();
        assert_eq!(
            err,
            MeshError::OutOfRange {
                row: 1,
                col: 1,
                value: 1.5
            }
        );
        assert!(HeightField::from_rows(&[[-0.1, 0.0], [0.0, 0.0]]).is_err());
    }

    #[test]
    fn test_from_fn() {
        let hf = HeightField::from_fn(3, 4, |i, j| (i * 4 + j) as f64 / 11.0).unwrap();
        assert_eq!((hf.rows(), hf.cols()), (3, 4));
        assert_eq!(hf.get(1, 2), 6.0 / 11.0);
        assert!((hf.get(2, 3) - 1.0).abs() < 1e-12);
    }
}
