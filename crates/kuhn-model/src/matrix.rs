// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Dense Cost Matrix
//!
//! A rectangular table of costs stored row-major in a single flat buffer.
//! Shape invariants (`rows >= 1`, `cols >= 1`, all rows of equal length) are
//! established at construction, so every `CostMatrix` in circulation is
//! valid and the solver never has to re-validate its input.
//!
//! The solver pads its working copy to a square with zero-cost dummy rows
//! or columns via [`CostMatrix::pad_to_square`]; any match landing in a
//! dummy row or column is reported as unassigned.

use crate::index::{ColumnIndex, RowIndex};
use kuhn_core::num::CostScalar;
use thiserror::Error;

/// Shape violations detected when building a [`CostMatrix`] from raw rows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The input had no rows, or its first row had no columns.
    #[error("cost matrix must have at least one row and one column")]
    Empty,

    /// A row's length differed from the first row's length.
    #[error("row {row} has {got} columns but expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

#[inline(always)]
fn flatten_index(cols: usize, row: RowIndex, col: ColumnIndex) -> usize {
    row.get() * cols + col.get()
}

/// A dense, row-major cost matrix.
///
/// # Examples
///
/// ```rust
/// # use kuhn_model::matrix::CostMatrix;
/// # use kuhn_model::index::{RowIndex, ColumnIndex};
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
/// ]).unwrap();
///
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.cols(), 3);
/// assert_eq!(matrix.get(RowIndex::new(1), ColumnIndex::new(2)), 6.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct CostMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // len = rows * cols
}

impl<T> CostMatrix<T>
where
    T: CostScalar,
{
    /// Creates a matrix of the given shape with every entry set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "called `CostMatrix::new` with an empty shape: {}x{}",
            rows,
            cols
        );

        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Builds a matrix from nested rows, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Empty`] if `rows` is empty or its first row is
    /// empty, and [`ShapeError::Ragged`] if any row's length differs from
    /// the first row's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kuhn_model::matrix::{CostMatrix, ShapeError};
    ///
    /// let err = CostMatrix::<f64>::from_rows(vec![]).unwrap_err();
    /// assert_eq!(err, ShapeError::Empty);
    ///
    /// let err = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    /// assert_eq!(err, ShapeError::Ragged { row: 1, expected: 2, got: 1 });
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let num_rows = rows.len();
        if num_rows == 0 || rows[0].is_empty() {
            return Err(ShapeError::Empty);
        }

        let num_cols = rows[0].len();
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(ShapeError::Ragged {
                    row: index,
                    expected: num_cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the side length a square padding would produce,
    /// i.e. `max(rows, cols)`.
    #[inline]
    pub fn side(&self) -> usize {
        kuhn_core::cmp::max(self.rows, self.cols)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: RowIndex, col: ColumnIndex) -> T {
        debug_assert!(
            row.get() < self.rows,
            "called `CostMatrix::get` with row index out of bounds: the len is {} but the index is {}",
            self.rows,
            row.get()
        );
        debug_assert!(
            col.get() < self.cols,
            "called `CostMatrix::get` with column index out of bounds: the len is {} but the index is {}",
            self.cols,
            col.get()
        );

        self.data[flatten_index(self.cols, row, col)]
    }

    /// Sets the entry at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: RowIndex, col: ColumnIndex, value: T) {
        debug_assert!(
            row.get() < self.rows,
            "called `CostMatrix::set` with row index out of bounds: the len is {} but the index is {}",
            self.rows,
            row.get()
        );
        debug_assert!(
            col.get() < self.cols,
            "called `CostMatrix::set` with column index out of bounds: the len is {} but the index is {}",
            self.cols,
            col.get()
        );

        let index = flatten_index(self.cols, row, col);
        self.data[index] = value;
    }

    /// Returns the given row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: RowIndex) -> &[T] {
        debug_assert!(
            row.get() < self.rows,
            "called `CostMatrix::row` with row index out of bounds: the len is {} but the index is {}",
            self.rows,
            row.get()
        );

        let start = row.get() * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the given row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row_mut(&mut self, row: RowIndex) -> &mut [T] {
        debug_assert!(
            row.get() < self.rows,
            "called `CostMatrix::row_mut` with row index out of bounds: the len is {} but the index is {}",
            self.rows,
            row.get()
        );

        let start = row.get() * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Returns all entries as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Grows the matrix in place to a square of side `max(rows, cols)` by
    /// appending rows or columns filled with `fill`. A square matrix is left
    /// untouched. Dummy lines are only ever appended on one axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kuhn_model::matrix::CostMatrix;
    ///
    /// let mut wide = CostMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// wide.pad_to_square(0.0);
    /// assert_eq!(wide.rows(), 3);
    /// assert_eq!(wide.cols(), 3);
    /// ```
    pub fn pad_to_square(&mut self, fill: T) {
        if self.rows < self.cols {
            // Extra dummy rows append directly in row-major order.
            self.data.resize(self.cols * self.cols, fill);
            self.rows = self.cols;
        } else if self.cols < self.rows {
            // Extra dummy columns force a reshape of the flat buffer.
            let side = self.rows;
            let mut data = Vec::with_capacity(side * side);
            for row in self.data.chunks_exact(self.cols) {
                data.extend_from_slice(row);
                data.resize(data.len() + (side - self.cols), fill);
            }
            self.cols = side;
            self.data = data;
        }
    }
}

impl<T> std::fmt::Debug for CostMatrix<T>
where
    T: CostScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CostMatrix({}x{})", self.rows, self.cols)?;
        for row in self.data.chunks_exact(self.cols) {
            for entry in row {
                write!(f, " {:?}", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ri(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn ci(i: usize) -> ColumnIndex {
        ColumnIndex::new(i)
    }

    #[test]
    fn test_new_fills_uniformly() {
        let m = CostMatrix::new(2, 3, 7.0);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.as_slice().iter().all(|&x| x == 7.0));
    }

    #[test]
    #[should_panic(expected = "called `CostMatrix::new` with an empty shape")]
    fn test_new_panics_on_zero_rows() {
        let _ = CostMatrix::new(0, 3, 0.0);
    }

    #[test]
    fn test_from_rows_round_trip() {
        let m = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.get(ri(0), ci(0)), 1);
        assert_eq!(m.get(ri(0), ci(2)), 3);
        assert_eq!(m.get(ri(1), ci(1)), 5);
        assert_eq!(m.row(ri(1)), &[4, 5, 6]);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(
            CostMatrix::<f64>::from_rows(vec![]).unwrap_err(),
            ShapeError::Empty
        );
        assert_eq!(
            CostMatrix::<f64>::from_rows(vec![vec![]]).unwrap_err(),
            ShapeError::Empty
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Ragged {
                row: 1,
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut m = CostMatrix::new(2, 2, 0);
        m.set(ri(1), ci(0), 42);
        assert_eq!(m.get(ri(1), ci(0)), 42);
        assert_eq!(m.get(ri(0), ci(0)), 0);
    }

    #[test]
    fn test_pad_wide_matrix_appends_rows() {
        let mut m = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        m.pad_to_square(0);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(ri(0)), &[1, 2, 3]);
        assert_eq!(m.row(ri(2)), &[0, 0, 0]);
    }

    #[test]
    fn test_pad_tall_matrix_appends_columns() {
        let mut m = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        m.pad_to_square(0);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(ri(0)), &[1, 2, 0]);
        assert_eq!(m.row(ri(2)), &[5, 6, 0]);
    }

    #[test]
    fn test_pad_square_is_noop() {
        let mut m = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let before = m.clone();
        m.pad_to_square(0);
        assert_eq!(m, before);
    }

    #[test]
    fn test_side() {
        let m = CostMatrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
        assert_eq!(m.side(), 3);
        assert!(!m.is_square());
    }
}
