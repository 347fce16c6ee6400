//! Dense complex matrices and the handful of linear-algebra operations the
//! simulator needs: product, Kronecker (tensor) product, identity,
//! matrix-vector application and conjugate transpose.

use crate::error::{Result, SimulatorError};
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Row-major dense complex matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Matrix::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = Complex64::new(1.0, 0.0);
        }
        m
    }

    /// Builds a matrix from nested rows. All rows must have equal length;
    /// used for the fixed gate constants where that holds by construction.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == n_cols), "ragged rows");
        let data = rows.into_iter().flatten().collect();
        Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: Complex64) {
        self.data[row * self.cols + col] = val;
    }

    pub(crate) fn from_flat(rows: usize, cols: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { rows, cols, data }
    }

    /// Standard matrix product.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(SimulatorError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let data: Vec<Complex64> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|i| {
                (0..other.cols).map(move |j| {
                    let mut sum = Complex64::new(0.0, 0.0);
                    for k in 0..self.cols {
                        sum += self.get(i, k) * other.get(k, j);
                    }
                    sum
                })
            })
            .collect();
        Ok(Matrix::from_flat(self.rows, other.cols, data))
    }

    /// Kronecker product. The left operand is the more significant block:
    /// the result has row index `i * other.rows + k` and column index
    /// `j * other.cols + l`. The embedding relies on this convention.
    pub fn tensor_product(&self, other: &Matrix) -> Matrix {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut m = Matrix::zeros(rows, cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a = self.get(i, j);
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        m.set(i * other.rows + k, j * other.cols + l, a * other.get(k, l));
                    }
                }
            }
        }
        m
    }

    /// Matrix-vector product, the inner loop of every gate application.
    pub fn apply_to_vector(&self, vector: &[Complex64]) -> Result<Vec<Complex64>> {
        if self.cols != vector.len() {
            return Err(SimulatorError::DimensionMismatch(format!(
                "cannot apply {}x{} matrix to vector of length {}",
                self.rows,
                self.cols,
                vector.len()
            )));
        }
        let result = (0..self.rows)
            .into_par_iter()
            .map(|i| {
                let mut sum = Complex64::new(0.0, 0.0);
                for j in 0..self.cols {
                    sum += self.get(i, j) * vector[j];
                }
                sum
            })
            .collect();
        Ok(result)
    }

    pub fn conjugate_transpose(&self) -> Matrix {
        let mut m = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                m.set(j, i, self.get(i, j).conj());
            }
        }
        m
    }

    /// Tolerance-based comparison; float matrices are never compared exactly.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).norm() < epsilon)
    }
}
