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

//! # Minimum Line Cover
//!
//! Covers every zero of a reduced matrix with the fewest horizontal and
//! vertical lines. The cover is derived from a maximum matching over the
//! zero pattern via König's construction: walk alternating paths from every
//! unmatched row, then cover the rows the walk missed and the columns it
//! reached. The resulting line count equals the matching size, so it is a
//! true minimum rather than a greedy estimate.

use crate::matching::{maximum_zero_matching, zero_columns_per_row};
use kuhn_core::num::CostScalar;
use kuhn_model::{
    index::{ColumnIndex, RowIndex},
    matrix::CostMatrix,
};

/// A set of covering lines over a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Cover {
    /// Returns `true` if the given row is covered.
    #[inline]
    pub fn covers_row(&self, row: RowIndex) -> bool {
        self.rows[row.get()]
    }

    /// Returns `true` if the given column is covered.
    #[inline]
    pub fn covers_col(&self, col: ColumnIndex) -> bool {
        self.cols[col.get()]
    }

    /// Returns the covered-row mask.
    #[inline]
    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    /// Returns the covered-column mask.
    #[inline]
    pub fn cols(&self) -> &[bool] {
        &self.cols
    }

    /// Returns the total number of covering lines.
    #[inline]
    pub fn num_lines(&self) -> usize {
        let row_lines = self.rows.iter().filter(|&&c| c).count();
        let col_lines = self.cols.iter().filter(|&&c| c).count();
        row_lines + col_lines
    }
}

/// Computes a minimum line cover of the zeros of `matrix`.
pub fn find_minimum_lines<T>(matrix: &CostMatrix<T>) -> Cover
where
    T: CostScalar,
{
    let zeros = zero_columns_per_row(matrix);
    let matching = maximum_zero_matching(&zeros, matrix.cols());

    let mut visited_rows = vec![false; matrix.rows()];
    let mut visited_cols = vec![false; matrix.cols()];

    // Alternating walk from every unmatched row: unmatched edge to a
    // column, matched edge back to a row.
    for row in 0..matrix.rows() {
        if matching.row_to_col()[row].is_none() {
            visit(
                row,
                &zeros,
                matching.col_to_row(),
                &mut visited_rows,
                &mut visited_cols,
            );
        }
    }

    let rows = visited_rows.iter().map(|&v| !v).collect();
    let cols = visited_cols;

    Cover { rows, cols }
}

fn visit(
    row: usize,
    zeros: &[Vec<usize>],
    col_to_row: &[Option<usize>],
    visited_rows: &mut [bool],
    visited_cols: &mut [bool],
) {
    if visited_rows[row] {
        return;
    }
    visited_rows[row] = true;

    for &col in &zeros[row] {
        if visited_cols[col] {
            continue;
        }
        visited_cols[col] = true;

        if let Some(matched_row) = col_to_row[col] {
            visit(matched_row, zeros, col_to_row, visited_rows, visited_cols);
        }
    }
}
