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

use crate::index::{ColumnIndex, RowIndex};
use kuhn_core::num::CostScalar;

/// The final assignment for a rectangular cost matrix.
///
/// `columns[r]` is the column matched to row `r`, or `None` when row `r` was
/// matched to a dummy padding column and is therefore unassigned. The
/// objective value is the sum of the original matrix entries of all assigned
/// pairs, regardless of whether the solve minimized or maximized.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment<T> {
    /// The total objective cost of this assignment.
    objective_value: T,

    /// The matched column for each row.
    /// `columns[r]` is the column assigned to row `r`.
    columns: Vec<Option<ColumnIndex>>,
}

impl<T> Assignment<T>
where
    T: CostScalar,
{
    /// Constructs a new `Assignment`.
    pub fn new(objective_value: T, columns: Vec<Option<ColumnIndex>>) -> Self {
        Self {
            objective_value,
            columns,
        }
    }

    /// Returns the column assigned to a specific row, or `None` if that row
    /// is unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `row_index` is out of bounds.
    #[inline]
    pub fn column_for_row(&self, row_index: RowIndex) -> Option<ColumnIndex> {
        let index = row_index.get();
        debug_assert!(
            index < self.num_rows(),
            "called `Assignment::column_for_row` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows(),
            index
        );

        self.columns[index]
    }

    /// Returns the number of rows covered by this assignment.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows that received a real column.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the total objective value of this assignment.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    /// Returns a slice of matched columns for all rows.
    #[inline]
    pub fn columns(&self) -> &[Option<ColumnIndex>] {
        &self.columns
    }
}

impl<T> std::fmt::Display for Assignment<T>
where
    T: CostScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        if self.num_rows() == 0 {
            writeln!(f, "   (No rows assigned)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Row", "Column")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (row, column) in self.columns.iter().enumerate() {
            match column {
                Some(col) => writeln!(f, "   {:<10} | {:<10}", row, col.get())?,
                None => writeln!(f, "   {:<10} | {:<10}", row, "-")?,
            }
        }

        Ok(())
    }
}
