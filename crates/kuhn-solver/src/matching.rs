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

//! # Maximum Matching over the Zero Pattern
//!
//! Treats the zero cells of a reduced cost matrix as a bipartite graph
//! between rows and columns and computes a maximum matching with augmenting
//! paths. The matching size equals the minimum number of covering lines
//! (König's theorem), which is what the cover phase needs to be exact.

use kuhn_core::num::CostScalar;
use kuhn_model::{index::RowIndex, matrix::CostMatrix};

/// A matching between rows and columns restricted to zero cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroMatching {
    /// `row_to_col[r]` is the column matched to row `r`.
    row_to_col: Vec<Option<usize>>,
    /// `col_to_row[c]` is the row matched to column `c`.
    col_to_row: Vec<Option<usize>>,
}

impl ZeroMatching {
    /// Returns the number of matched pairs.
    #[inline]
    pub fn size(&self) -> usize {
        self.row_to_col.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the matched column for each row.
    #[inline]
    pub fn row_to_col(&self) -> &[Option<usize>] {
        &self.row_to_col
    }

    /// Returns the matched row for each column.
    #[inline]
    pub fn col_to_row(&self) -> &[Option<usize>] {
        &self.col_to_row
    }
}

/// Collects, per row, the columns holding an exact zero.
pub fn zero_columns_per_row<T>(matrix: &CostMatrix<T>) -> Vec<Vec<usize>>
where
    T: CostScalar,
{
    let mut zeros = Vec::with_capacity(matrix.rows());
    for row in 0..matrix.rows() {
        let columns = matrix
            .row(RowIndex::new(row))
            .iter()
            .enumerate()
            .filter(|(_, &entry)| entry == T::zero())
            .map(|(col, _)| col)
            .collect();
        zeros.push(columns);
    }
    zeros
}

/// Computes a maximum matching over the given zero adjacency lists using
/// augmenting paths.
pub fn maximum_zero_matching(zeros: &[Vec<usize>], num_cols: usize) -> ZeroMatching {
    let mut row_to_col = vec![None; zeros.len()];
    let mut col_to_row = vec![None; num_cols];

    for row in 0..zeros.len() {
        let mut visited = vec![false; num_cols];
        try_augment(zeros, row, &mut visited, &mut row_to_col, &mut col_to_row);
    }

    ZeroMatching {
        row_to_col,
        col_to_row,
    }
}

/// Tries to find an augmenting path starting at `row`, flipping the matching
/// along the path on success.
pub(crate) fn try_augment(
    zeros: &[Vec<usize>],
    row: usize,
    visited: &mut [bool],
    row_to_col: &mut [Option<usize>],
    col_to_row: &mut [Option<usize>],
) -> bool {
    for &col in &zeros[row] {
        if visited[col] {
            continue;
        }
        visited[col] = true;

        let free = match col_to_row[col] {
            None => true,
            Some(other) => try_augment(zeros, other, visited, row_to_col, col_to_row),
        };

        if free {
            row_to_col[row] = Some(col);
            col_to_row[col] = Some(row);
            return true;
        }
    }

    false
}

/// Convenience wrapper: maximum matching over the zero cells of a matrix.
pub fn maximum_zero_matching_of<T>(matrix: &CostMatrix<T>) -> ZeroMatching
where
    T: CostScalar,
{
    let zeros = zero_columns_per_row(matrix);
    maximum_zero_matching(&zeros, matrix.cols())
}
