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

//! # Matrix Reduction
//!
//! The first phase of the Kuhn-Munkres pipeline. Subtracting each row's
//! minimum from the row and each column's minimum from the column leaves a
//! matrix with at least one zero per line and does not change which
//! assignment is optimal, only its apparent cost.
//!
//! Maximization reuses the same machinery: replacing every entry `x` with
//! `max - x` (the global maximum of the matrix) turns the best assignment
//! into the cheapest one, with all entries still non-negative.

use kuhn_core::{
    cmp,
    num::CostScalar,
};
use kuhn_model::{
    index::{ColumnIndex, RowIndex},
    matrix::CostMatrix,
};

/// Returns the largest entry of the matrix.
pub fn global_maximum<T>(matrix: &CostMatrix<T>) -> T
where
    T: CostScalar,
{
    let mut maximum = matrix.get(RowIndex::new(0), ColumnIndex::new(0));
    for &entry in matrix.as_slice() {
        maximum = cmp::max(maximum, entry);
    }
    maximum
}

/// Replaces every entry `x` with `max - x`, where `max` is the global
/// maximum of the matrix. Minimizing the transformed matrix maximizes the
/// original one.
pub fn to_minimization_form<T>(matrix: &mut CostMatrix<T>)
where
    T: CostScalar,
{
    let maximum = global_maximum(matrix);
    for row in 0..matrix.rows() {
        for entry in matrix.row_mut(RowIndex::new(row)) {
            *entry = maximum - *entry;
        }
    }
}

/// Subtracts each row's minimum from every entry of that row.
///
/// Afterwards every row contains at least one exact zero. Rows whose
/// minimum already is zero are left untouched.
pub fn subtract_row_minima<T>(matrix: &mut CostMatrix<T>)
where
    T: CostScalar,
{
    for row in 0..matrix.rows() {
        let entries = matrix.row_mut(RowIndex::new(row));

        // No early exit on a zero here: entries may still be negative at
        // this point, unlike in the column pass that follows.
        let mut minimum = entries[0];
        for &entry in entries.iter().skip(1) {
            minimum = cmp::min(minimum, entry);
        }

        if minimum != T::zero() {
            for entry in entries {
                *entry = *entry - minimum;
            }
        }
    }
}

/// Subtracts each column's minimum from every entry of that column.
///
/// The scan of a column stops as soon as a zero is seen, since the minimum
/// cannot drop below zero after row reduction.
pub fn subtract_column_minima<T>(matrix: &mut CostMatrix<T>)
where
    T: CostScalar,
{
    for col in 0..matrix.cols() {
        let column = ColumnIndex::new(col);

        let mut minimum = matrix.get(RowIndex::new(0), column);
        for row in 1..matrix.rows() {
            if minimum == T::zero() {
                break;
            }
            minimum = cmp::min(minimum, matrix.get(RowIndex::new(row), column));
        }

        if minimum != T::zero() {
            for row in 0..matrix.rows() {
                let index = RowIndex::new(row);
                let entry = matrix.get(index, column);
                matrix.set(index, column, entry - minimum);
            }
        }
    }
}
