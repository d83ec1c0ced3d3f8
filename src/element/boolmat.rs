//! Square boolean matrices.

use crate::element::Element;
use serde::{Deserialize, Serialize};

/// An `n × n` boolean matrix under the or-and product.
///
/// Entries are stored row-major in one flat vector of length `n * n`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BooleanMat {
    entries: Vec<bool>,
    dim: usize,
}

impl BooleanMat {
    /// Creates a boolean matrix from its rows.
    ///
    /// # Panics
    /// Panics if the rows do not form a square matrix.
    pub fn new(rows: &[Vec<bool>]) -> Self {
        let dim = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == dim),
            "boolean matrix must be square"
        );
        Self {
            entries: rows.iter().flatten().copied().collect(),
            dim,
        }
    }

    /// Creates a boolean matrix from 0/1 rows.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let dim = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == dim),
            "boolean matrix must be square"
        );
        Self {
            entries: rows.iter().flatten().map(|&e| e != 0).collect(),
            dim,
        }
    }

    /// Returns entry `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.entries[row * self.dim + col]
    }
}

impl Element for BooleanMat {
    fn degree(&self) -> usize {
        self.dim
    }

    fn complexity(&self) -> usize {
        self.dim * self.dim * self.dim
    }

    fn identity(&self) -> Self {
        let mut entries = vec![false; self.dim * self.dim];
        for i in 0..self.dim {
            entries[i * self.dim + i] = true;
        }
        Self {
            entries,
            dim: self.dim,
        }
    }

    fn multiply(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.dim, y.dim);
        let n = x.dim;
        self.dim = n;
        self.entries.clear();
        self.entries.resize(n * n, false);
        for row in 0..n {
            for mid in 0..n {
                if x.entries[row * n + mid] {
                    for col in 0..n {
                        if y.entries[mid * n + col] {
                            self.entries[row * n + col] = true;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_and_product() {
        let x = BooleanMat::from_rows(&[vec![1, 0, 1], vec![0, 1, 0], vec![0, 1, 0]]);
        let xx = BooleanMat::product(&x, &x);
        assert_eq!(
            xx,
            BooleanMat::from_rows(&[vec![1, 1, 1], vec![0, 1, 0], vec![0, 1, 0]])
        );
    }

    #[test]
    fn identity_matrix() {
        let x = BooleanMat::from_rows(&[vec![0, 1], vec![1, 1]]);
        let one = x.identity();
        assert_eq!(one, BooleanMat::from_rows(&[vec![1, 0], vec![0, 1]]));
        assert_eq!(BooleanMat::product(&x, &one), x);
        assert_eq!(BooleanMat::product(&one, &x), x);
    }

    #[test]
    fn zero_matrix_is_idempotent() {
        let zero = BooleanMat::from_rows(&[vec![0, 0], vec![0, 0]]);
        assert_eq!(BooleanMat::product(&zero, &zero), zero);
    }
}
