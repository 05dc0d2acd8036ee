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

//! # Zero Extraction
//!
//! The final phase: turn the zero pattern of a fully reduced matrix into
//! one zero-cost cell per row. Rows are processed most-constrained-first
//! (fewest free zero columns), which resolves the vast majority of
//! instances directly. When a row runs out of free zeros the earlier
//! choices are rerouted along an augmenting path instead of giving up, so
//! extraction succeeds whenever a perfect zero matching exists.

use crate::matching::{try_augment, zero_columns_per_row};
use kuhn_core::num::CostScalar;
use kuhn_model::matrix::CostMatrix;

/// Picks one zero cell per row such that no column is used twice.
///
/// Returns `None` only when the zero pattern admits no perfect matching,
/// which cannot happen after the cover loop has reached a full line cover.
pub fn extract_matches<T>(matrix: &CostMatrix<T>) -> Option<Vec<usize>>
where
    T: CostScalar,
{
    let zeros = zero_columns_per_row(matrix);
    let num_rows = matrix.rows();

    let mut row_to_col: Vec<Option<usize>> = vec![None; num_rows];
    let mut col_to_row: Vec<Option<usize>> = vec![None; matrix.cols()];

    for _ in 0..num_rows {
        let (free_zeros, row) = most_constrained_row(&zeros, &row_to_col, &col_to_row)?;

        if free_zeros > 0 {
            let col = zeros[row]
                .iter()
                .copied()
                .find(|&c| col_to_row[c].is_none())?;
            row_to_col[row] = Some(col);
            col_to_row[col] = Some(row);
        } else {
            // Dead end: every zero of this row sits in a taken column.
            // Reroute the earlier picks along an augmenting path.
            let mut visited = vec![false; matrix.cols()];
            if !try_augment(&zeros, row, &mut visited, &mut row_to_col, &mut col_to_row) {
                return None;
            }
        }
    }

    row_to_col.into_iter().collect()
}

/// Returns the unassigned row with the fewest zeros in still-free columns,
/// together with that count. Ties break towards the lower row index.
fn most_constrained_row(
    zeros: &[Vec<usize>],
    row_to_col: &[Option<usize>],
    col_to_row: &[Option<usize>],
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for (row, columns) in zeros.iter().enumerate() {
        if row_to_col[row].is_some() {
            continue;
        }
        let free_zeros = columns
            .iter()
            .filter(|&&col| col_to_row[col].is_none())
            .count();

        best = match best {
            Some((count, _)) if count <= free_zeros => best,
            _ => Some((free_zeros, row)),
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuhn_model::index::{ColumnIndex, RowIndex};

    fn matrix(rows: Vec<Vec<i64>>) -> CostMatrix<i64> {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn assert_perfect_zero_matching(m: &CostMatrix<i64>, columns: &[usize]) {
        assert_eq!(columns.len(), m.rows());

        let mut seen = vec![false; m.cols()];
        for (row, &col) in columns.iter().enumerate() {
            assert!(!seen[col], "column {} assigned twice", col);
            seen[col] = true;
            assert_eq!(
                m.get(RowIndex::new(row), ColumnIndex::new(col)),
                0,
                "row {} matched to a non-zero cell",
                row
            );
        }
    }

    #[test]
    fn test_diagonal_zeros() {
        let m = matrix(vec![vec![0, 1, 2], vec![3, 0, 4], vec![5, 6, 0]]);
        let columns = extract_matches(&m).unwrap();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn test_constrained_row_goes_first() {
        // Row 1 has a single zero, so it must claim column 0 before row 0
        // gets a chance to.
        let m = matrix(vec![vec![0, 0], vec![0, 5]]);
        let columns = extract_matches(&m).unwrap();
        assert_eq!(columns, vec![1, 0]);
    }

    #[test]
    fn test_dead_end_is_repaired() {
        // Greedy most-constrained-first picks itself into a corner on this
        // pattern; the augmenting repair must still find the perfect
        // matching.
        let m = matrix(vec![
            vec![7, 18, 0, 0, 3, 3],
            vec![11, 9, 0, 18, 0, 0],
            vec![5, 0, 24, 9, 0, 0],
            vec![11, 0, 28, 18, 3, 3],
            vec![0, 23, 15, 15, 3, 3],
            vec![20, 24, 21, 4, 0, 0],
        ]);
        let columns = extract_matches(&m).unwrap();
        assert_perfect_zero_matching(&m, &columns);
    }

    #[test]
    fn test_deficient_pattern_returns_none() {
        // Both rows only have zeros in column 0.
        let m = matrix(vec![vec![0, 1], vec![0, 2]]);
        assert_eq!(extract_matches(&m), None);
    }
}
