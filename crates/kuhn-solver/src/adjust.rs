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

//! # Dual Adjustment
//!
//! When the minimum line cover is smaller than the matrix side, the zero
//! pattern is too sparse for a perfect matching. Subtracting the smallest
//! uncovered entry from all uncovered cells and adding it to all
//! doubly-covered cells creates at least one new zero outside the cover
//! while keeping every entry non-negative.

use crate::cover::Cover;
use kuhn_core::{cmp, num::CostScalar};
use kuhn_model::{
    index::{ColumnIndex, RowIndex},
    matrix::CostMatrix,
};

/// Returns the smallest entry not covered by any line, or `None` if every
/// cell is covered.
pub fn uncovered_minimum<T>(matrix: &CostMatrix<T>, cover: &Cover) -> Option<T>
where
    T: CostScalar,
{
    let mut minimum: Option<T> = None;

    for row in 0..matrix.rows() {
        if cover.covers_row(RowIndex::new(row)) {
            continue;
        }
        for col in 0..matrix.cols() {
            if cover.covers_col(ColumnIndex::new(col)) {
                continue;
            }
            let entry = matrix.get(RowIndex::new(row), ColumnIndex::new(col));
            minimum = Some(match minimum {
                None => entry,
                Some(current) => cmp::min(current, entry),
            });
        }
    }

    minimum
}

/// Subtracts `delta` from every uncovered cell and adds it to every cell
/// covered by both a row and a column line. Singly-covered cells stay put.
pub fn apply_adjustment<T>(matrix: &mut CostMatrix<T>, cover: &Cover, delta: T)
where
    T: CostScalar,
{
    for row in 0..matrix.rows() {
        let row_index = RowIndex::new(row);
        let row_covered = cover.covers_row(row_index);

        for col in 0..matrix.cols() {
            let col_index = ColumnIndex::new(col);
            let col_covered = cover.covers_col(col_index);

            if row_covered && col_covered {
                let entry = matrix.get(row_index, col_index);
                matrix.set(row_index, col_index, entry + delta);
            } else if !row_covered && !col_covered {
                let entry = matrix.get(row_index, col_index);
                matrix.set(row_index, col_index, entry - delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::find_minimum_lines;

    fn matrix(rows: Vec<Vec<i64>>) -> CostMatrix<i64> {
        CostMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_uncovered_minimum_on_partial_cover() {
        // Zeros live in column 0, so the cover is that single column and
        // the uncovered minimum is the smallest entry outside it.
        let m = matrix(vec![vec![0, 5, 9], vec![0, 3, 7], vec![0, 8, 4]]);
        let cover = find_minimum_lines(&m);
        assert_eq!(cover.num_lines(), 1);
        assert_eq!(uncovered_minimum(&m, &cover), Some(3));
    }

    #[test]
    fn test_uncovered_minimum_none_when_fully_covered() {
        let m = matrix(vec![vec![0, 1], vec![1, 0]]);
        let cover = find_minimum_lines(&m);
        assert_eq!(cover.num_lines(), 2);

        // A full cover of a 2x2 matrix leaves no uncovered cell when both
        // lines are rows.
        if cover.rows().iter().all(|&r| r) {
            assert_eq!(uncovered_minimum(&m, &cover), None);
        }
    }

    #[test]
    fn test_apply_adjustment_worked_example() {
        let mut m = matrix(vec![vec![0, 5, 9], vec![0, 3, 7], vec![0, 8, 4]]);
        let cover = find_minimum_lines(&m);
        let delta = uncovered_minimum(&m, &cover).unwrap();
        apply_adjustment(&mut m, &cover, delta);

        // Column 0 is covered and untouched, everything else drops by 3.
        assert_eq!(m.row(RowIndex::new(0)), &[0, 2, 6]);
        assert_eq!(m.row(RowIndex::new(1)), &[0, 0, 4]);
        assert_eq!(m.row(RowIndex::new(2)), &[0, 5, 1]);
    }

    #[test]
    fn test_adjustment_grows_the_cover() {
        let mut m = matrix(vec![vec![0, 5, 9], vec![0, 3, 7], vec![0, 8, 4]]);
        let before = find_minimum_lines(&m).num_lines();

        let cover = find_minimum_lines(&m);
        let delta = uncovered_minimum(&m, &cover).unwrap();
        apply_adjustment(&mut m, &cover, delta);

        let after = find_minimum_lines(&m).num_lines();
        assert!(after > before, "cover did not grow: {} -> {}", before, after);
        assert!(m.as_slice().iter().all(|&x| x >= 0));
    }

    #[test]
    fn test_doubly_covered_cells_increase() {
        // Hand-built cover: row 0 and column 0 covered. Cell (0, 0) is
        // doubly covered and must rise by delta.
        let mut m = matrix(vec![vec![4, 0, 0], vec![0, 2, 3], vec![0, 5, 6]]);
        let cover = find_minimum_lines(&m);
        assert_eq!(cover.num_lines(), 2);
        assert!(cover.covers_row(RowIndex::new(0)));
        assert!(cover.covers_col(ColumnIndex::new(0)));

        let delta = uncovered_minimum(&m, &cover).unwrap();
        assert_eq!(delta, 2);
        apply_adjustment(&mut m, &cover, delta);

        assert_eq!(m.get(RowIndex::new(0), ColumnIndex::new(0)), 6);
        assert_eq!(m.get(RowIndex::new(1), ColumnIndex::new(1)), 0);
        assert!(m.as_slice().iter().all(|&x| x >= 0));
    }
}
