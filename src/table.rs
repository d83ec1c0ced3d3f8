//! Dense rectangular storage for the Cayley graphs and flag tables.
//!
//! `Table<T>` is a row-addressable matrix stored in one contiguous buffer.
//! Both Cayley graphs (`Table<Position>`) and the reduced-word flags
//! (`Table<bool>`) grow in lockstep with the element list: one row per
//! element, one column per generator.
//!
//! # Invariants
//! - Every row has exactly `nr_cols` entries.
//! - `add_rows` appends rows filled with the default value; existing
//!   entries are never moved.
//! - `add_cols` widens every existing row in place, padding with the
//!   default value; entry `(r, c)` keeps its value for all old `c`.

use serde::{Deserialize, Serialize};

/// Dense matrix with O(1) access and amortised O(1) row growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table<T> {
    data: Vec<T>,
    nr_cols: usize,
    default: T,
}

impl<T: Clone> Table<T> {
    /// Creates an empty table with the given width.
    ///
    /// New entries created by `add_rows` and `add_cols` are initialised
    /// with `default`.
    pub fn new(nr_cols: usize, default: T) -> Self {
        Self {
            data: Vec::new(),
            nr_cols,
            default,
        }
    }

    /// Creates an empty table with capacity reserved for `nr_rows` rows.
    pub fn with_capacity(nr_cols: usize, nr_rows: usize, default: T) -> Self {
        Self {
            data: Vec::with_capacity(nr_cols * nr_rows),
            nr_cols,
            default,
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn nr_rows(&self) -> usize {
        if self.nr_cols == 0 {
            0
        } else {
            self.data.len() / self.nr_cols
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn nr_cols(&self) -> usize {
        self.nr_cols
    }

    /// Appends `n` rows filled with the default value.
    pub fn add_rows(&mut self, n: usize) {
        self.data
            .resize(self.data.len() + n * self.nr_cols, self.default.clone());
    }

    /// Reserves capacity for `n` additional rows.
    pub fn reserve_rows(&mut self, n: usize) {
        self.data.reserve(n * self.nr_cols);
    }

    /// Widens the table by `n` columns, padding each existing row with the
    /// default value.
    pub fn add_cols(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let old_cols = self.nr_cols;
        let new_cols = old_cols + n;
        let nr_rows = self.nr_rows();
        let mut data = Vec::with_capacity(new_cols * nr_rows);
        for row in 0..nr_rows {
            data.extend_from_slice(&self.data[row * old_cols..(row + 1) * old_cols]);
            data.resize(data.len() + n, self.default.clone());
        }
        self.data = data;
        self.nr_cols = new_cols;
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.nr_cols);
        self.data[row * self.nr_cols + col].clone()
    }

    /// Sets the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.nr_cols);
        self.data[row * self.nr_cols + col] = value;
    }

    /// Returns the row at `row` as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.nr_cols..(row + 1) * self.nr_cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_basic() {
        let mut table: Table<usize> = Table::new(3, usize::MAX);
        assert_eq!(table.nr_rows(), 0);
        assert_eq!(table.nr_cols(), 3);

        table.add_rows(2);
        assert_eq!(table.nr_rows(), 2);
        assert_eq!(table.get(0, 0), usize::MAX);

        table.set(0, 1, 7);
        table.set(1, 2, 9);
        assert_eq!(table.get(0, 1), 7);
        assert_eq!(table.get(1, 2), 9);
        assert_eq!(table.row(0), &[usize::MAX, 7, usize::MAX]);
    }

    #[test]
    fn add_cols_preserves_entries() {
        let mut table: Table<usize> = Table::new(2, 0);
        table.add_rows(3);
        for row in 0..3 {
            for col in 0..2 {
                table.set(row, col, 10 * row + col);
            }
        }
        table.add_cols(2);
        assert_eq!(table.nr_cols(), 4);
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(table.get(row, col), 10 * row + col);
            }
            assert_eq!(table.get(row, 2), 0);
            assert_eq!(table.get(row, 3), 0);
        }
    }

    #[test]
    fn flags_default_false() {
        let mut flags: Table<bool> = Table::new(4, false);
        flags.add_rows(2);
        assert!(!flags.get(1, 3));
        flags.set(1, 3, true);
        assert!(flags.get(1, 3));
        flags.add_cols(1);
        assert!(flags.get(1, 3));
        assert!(!flags.get(1, 4));
    }
}
