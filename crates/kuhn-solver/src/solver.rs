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

//! # Assignment Solver
//!
//! The high-level orchestrator of the Kuhn-Munkres pipeline. A solve runs
//! in five steps: optionally flip the matrix for maximization, pad it to a
//! square, reduce rows and columns, iterate cover/adjust until the minimum
//! line cover spans the whole matrix, then extract one zero per row.
//!
//! ## Motivation
//!
//! The phases in `reduction`, `cover`, `adjust` and `extract` are each
//! small and independently testable. This module wires them into a single
//! fallible entry point, maps the padded square solution back onto the
//! original rectangle and reports statistics about the run.
//!
//! ## Highlights
//!
//! - Builder pattern: `SolverBuilder` to configure the optimization
//!   direction and the dual adjustment cap.
//! - The objective is always computed against the original matrix, so the
//!   maximization transform and the padding never leak into the result.
//! - Rows matched to a dummy padding column come back as `None`.
//!
//! ## Usage
//!
//! ```rust
//! use kuhn_solver::solver::{Direction, SolverBuilder};
//!
//! let solver = SolverBuilder::new()
//!     .with_direction(Direction::Minimize)
//!     .build();
//!
//! let outcome = solver
//!     .solve_rows(vec![vec![1, 2], vec![2, 1]])
//!     .unwrap();
//!
//! assert_eq!(outcome.assignment().objective_value(), 2);
//! ```

use crate::{
    adjust::{apply_adjustment, uncovered_minimum},
    cover::find_minimum_lines,
    error::{SolveError, SolveResult},
    extract::extract_matches,
    reduction::{subtract_column_minima, subtract_row_minima, to_minimization_form},
    stats::{SolveStatistics, SolveStatisticsBuilder},
};
use kuhn_core::num::CostScalar;
use kuhn_model::{
    assignment::Assignment,
    index::{ColumnIndex, RowIndex},
    matrix::CostMatrix,
};
use tracing::{debug, trace};

/// The optimization direction of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Find the assignment with the smallest total cost.
    #[default]
    Minimize,
    /// Find the assignment with the largest total cost.
    Maximize,
}

/// The result of a successful solve: the assignment plus run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<T> {
    assignment: Assignment<T>,
    statistics: SolveStatistics,
}

impl<T> SolveOutcome<T>
where
    T: CostScalar,
{
    /// Returns the computed assignment.
    #[inline]
    pub fn assignment(&self) -> &Assignment<T> {
        &self.assignment
    }

    /// Returns the statistics collected during the solve.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the assignment.
    #[inline]
    pub fn into_assignment(self) -> Assignment<T> {
        self.assignment
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: CostScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.assignment)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)
    }
}

/// An exact solver for the rectangular linear assignment problem.
pub struct Solver {
    direction: Direction,
    max_adjustments: Option<u64>,
}

impl Solver {
    /// Returns the configured optimization direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the configured dual adjustment cap, if any. Without an
    /// explicit cap the solver uses `side * side` for a matrix padded to
    /// side `side`, comfortably above the iterations any instance needs.
    #[inline]
    pub fn max_adjustments(&self) -> Option<u64> {
        self.max_adjustments
    }

    /// Solves the assignment problem for the given cost matrix.
    ///
    /// The matrix may be rectangular. With more rows than columns, the
    /// surplus rows come back unassigned; with more columns than rows,
    /// the surplus columns are simply not used.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::CoverStalled`] if the dual adjustment loop
    /// exceeds its cap, and [`SolveError::Internal`] if a pipeline
    /// invariant breaks. Neither occurs on well-formed inputs.
    pub fn solve<T>(&self, matrix: &CostMatrix<T>) -> SolveResult<SolveOutcome<T>>
    where
        T: CostScalar,
    {
        let start_time = std::time::Instant::now();
        let side = matrix.side();
        let adjustment_cap = self.max_adjustments.unwrap_or((side * side) as u64);

        debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            direction = ?self.direction,
            "starting assignment solve"
        );

        // 1. Build the working square: flip for maximization, pad, reduce.
        let mut working = matrix.clone();
        if self.direction == Direction::Maximize {
            to_minimization_form(&mut working);
        }
        working.pad_to_square(T::zero());
        subtract_row_minima(&mut working);
        subtract_column_minima(&mut working);

        // 2. Cover and adjust until every line can hold its own zero.
        let mut outer_iterations = 0u64;
        let mut adjustments = 0u64;
        loop {
            outer_iterations += 1;
            let cover = find_minimum_lines(&working);
            trace!(
                iteration = outer_iterations,
                lines = cover.num_lines(),
                "computed minimum line cover"
            );

            if cover.num_lines() >= side {
                break;
            }
            if adjustments >= adjustment_cap {
                return Err(SolveError::CoverStalled {
                    iterations: adjustments,
                });
            }

            let delta = uncovered_minimum(&working, &cover)
                .ok_or(SolveError::Internal("partial cover left no uncovered cell"))?;
            apply_adjustment(&mut working, &cover, delta);
            adjustments += 1;
        }

        // 3. Extract and map back onto the original rectangle.
        let columns = extract_matches(&working).ok_or(SolveError::Internal(
            "full line cover admitted no perfect zero matching",
        ))?;
        let assignment = self.build_assignment(matrix, &columns);

        let statistics = SolveStatisticsBuilder::new()
            .outer_iterations(outer_iterations)
            .adjustments(adjustments)
            .solve_duration(start_time.elapsed())
            .build();

        debug!(
            objective = %assignment.objective_value(),
            outer_iterations,
            adjustments,
            "assignment solve finished"
        );

        Ok(SolveOutcome {
            assignment,
            statistics,
        })
    }

    /// Convenience entry point: validates raw rows and solves them.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Shape`] when the rows are empty or ragged,
    /// plus everything [`Solver::solve`] can return.
    pub fn solve_rows<T>(&self, rows: Vec<Vec<T>>) -> SolveResult<SolveOutcome<T>>
    where
        T: CostScalar,
    {
        let matrix = CostMatrix::from_rows(rows)?;
        self.solve(&matrix)
    }

    /// Sums the original costs of all matched real cells and pairs each
    /// row with its column, dropping matches that landed in the padding.
    fn build_assignment<T>(&self, original: &CostMatrix<T>, columns: &[usize]) -> Assignment<T>
    where
        T: CostScalar,
    {
        let mut matched = Vec::with_capacity(original.rows());
        let mut objective = T::zero();

        for row in 0..original.rows() {
            let col = columns[row];
            if col < original.cols() {
                objective = objective + original.get(RowIndex::new(row), ColumnIndex::new(col));
                matched.push(Some(ColumnIndex::new(col)));
            } else {
                matched.push(None);
            }
        }

        Assignment::new(objective, matched)
    }
}

/// Builder for [`Solver`].
pub struct SolverBuilder {
    direction: Direction,
    max_adjustments: Option<u64>,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            direction: Direction::Minimize,
            max_adjustments: None,
        }
    }

    /// Sets the optimization direction.
    #[inline]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Caps the number of dual adjustments before the solve gives up.
    #[inline]
    pub fn with_max_adjustments(mut self, max_adjustments: u64) -> Self {
        self.max_adjustments = Some(max_adjustments);
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            direction: self.direction,
            max_adjustments: self.max_adjustments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> ColumnIndex {
        ColumnIndex::new(i)
    }

    fn minimize() -> Solver {
        SolverBuilder::new().build()
    }

    fn maximize() -> Solver {
        SolverBuilder::new()
            .with_direction(Direction::Maximize)
            .build()
    }

    #[test]
    fn test_square_instance() {
        let outcome = minimize()
            .solve_rows(vec![
                vec![46, 31, 89, 56, 69],
                vec![64, 57, 9, 44, 68],
                vec![51, 28, 46, 41, 61],
                vec![57, 22, 50, 38, 91],
                vec![65, 53, 73, 5, 71],
            ])
            .unwrap();

        assert_eq!(outcome.assignment().objective_value(), 143);
        assert_eq!(outcome.assignment().num_assigned(), 5);
    }

    #[test]
    fn test_wide_instance_uses_best_columns() {
        let outcome = minimize()
            .solve_rows(vec![
                vec![35, 7, 97, 60, 60, 50, 66],
                vec![20, 91, 94, 9, 3, 78, 24],
                vec![65, 2, 61, 25, 79, 83, 98],
            ])
            .unwrap();

        assert_eq!(outcome.assignment().objective_value(), 35);
        assert_eq!(outcome.assignment().num_assigned(), 3);
    }

    #[test]
    fn test_tall_instance_leaves_a_row_unassigned() {
        let outcome = minimize()
            .solve_rows(vec![
                vec![0, 83, 69],
                vec![77, 0, 0],
                vec![11, 0, 0],
                vec![0, 9, 98],
            ])
            .unwrap();

        let assignment = outcome.assignment();
        assert_eq!(assignment.objective_value(), 0);
        assert_eq!(assignment.num_rows(), 4);
        assert_eq!(assignment.num_assigned(), 3);
        assert_eq!(assignment.columns().iter().filter(|c| c.is_none()).count(), 1);

        // All three real columns must be used, each exactly once.
        let mut used = vec![false; 3];
        for col in assignment.columns().iter().flatten() {
            assert!(!used[col.get()]);
            used[col.get()] = true;
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_diagonal_beats_anti_diagonal() {
        let outcome = minimize().solve_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(outcome.assignment().objective_value(), 2);
        assert_eq!(outcome.assignment().columns(), &[Some(ci(0)), Some(ci(1))]);
    }

    #[test]
    fn test_identity_like_matrix() {
        let outcome = minimize()
            .solve_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])
            .unwrap();

        let assignment = outcome.assignment();
        assert_eq!(assignment.objective_value(), 0);
        assert_eq!(
            assignment.columns(),
            &[Some(ci(0)), Some(ci(1)), Some(ci(2))]
        );
    }

    #[test]
    fn test_single_cell() {
        let outcome = minimize().solve_rows(vec![vec![7]]).unwrap();
        assert_eq!(outcome.assignment().objective_value(), 7);
        assert_eq!(outcome.assignment().columns(), &[Some(ci(0))]);
    }

    #[test]
    fn test_single_row_picks_cheapest_column() {
        let outcome = minimize().solve_rows(vec![vec![5, 2, 9]]).unwrap();
        assert_eq!(outcome.assignment().objective_value(), 2);
        assert_eq!(outcome.assignment().column_for_row(RowIndex::new(0)), Some(ci(1)));
    }

    #[test]
    fn test_maximize_flips_the_objective() {
        let outcome = maximize()
            .solve_rows(vec![vec![1, 2], vec![3, 4]])
            .unwrap();
        assert_eq!(outcome.assignment().objective_value(), 5);

        let outcome = maximize().solve_rows(vec![vec![5, 2, 9]]).unwrap();
        assert_eq!(outcome.assignment().objective_value(), 9);
        assert_eq!(outcome.assignment().column_for_row(RowIndex::new(0)), Some(ci(2)));
    }

    #[test]
    fn test_float_costs() {
        let outcome = minimize()
            .solve_rows(vec![vec![1.5, 2.5], vec![2.5, 1.5]])
            .unwrap();
        assert_eq!(outcome.assignment().objective_value(), 3.0);
    }

    #[test]
    fn test_shape_error_propagates() {
        let err = minimize().solve_rows(Vec::<Vec<i64>>::new()).unwrap_err();
        assert!(matches!(err, SolveError::Shape(_)));
    }

    #[test]
    fn test_tight_adjustment_cap_stalls() {
        // This instance needs at least one dual adjustment; a zero cap
        // must surface as a stall instead of spinning.
        let solver = SolverBuilder::new().with_max_adjustments(0).build();
        let result = solver.solve_rows(vec![vec![0, 5, 9], vec![0, 3, 7], vec![0, 8, 4]]);
        assert!(matches!(
            result,
            Err(SolveError::CoverStalled { iterations: 0 })
        ));
    }

    #[test]
    fn test_statistics_are_populated() {
        let outcome = minimize()
            .solve_rows(vec![vec![0, 5, 9], vec![0, 3, 7], vec![0, 8, 4]])
            .unwrap();

        let stats = outcome.statistics();
        assert!(stats.outer_iterations >= 1);
        assert!(stats.adjustments >= 1);
    }

    #[test]
    fn test_outcome_display_contains_both_sections() {
        let outcome = minimize().solve_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Assignment Summary"));
        assert!(rendered.contains("Solve Statistics:"));
    }

    mod randomized {
        use super::*;
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        fn random_rows(rng: &mut ChaCha8Rng, num_rows: usize, num_cols: usize) -> Vec<Vec<i64>> {
            (0..num_rows)
                .map(|_| (0..num_cols).map(|_| rng.random_range(0..50)).collect())
                .collect()
        }

        /// Enumerates all injective row-to-column maps. Only feasible for
        /// instances with `rows <= cols` and tiny sizes.
        fn enumerate_objectives(rows: &[Vec<i64>]) -> Vec<i64> {
            fn recurse(
                rows: &[Vec<i64>],
                row: usize,
                used: &mut [bool],
                acc: i64,
                out: &mut Vec<i64>,
            ) {
                if row == rows.len() {
                    out.push(acc);
                    return;
                }
                for col in 0..used.len() {
                    if !used[col] {
                        used[col] = true;
                        recurse(rows, row + 1, used, acc + rows[row][col], out);
                        used[col] = false;
                    }
                }
            }

            let mut out = Vec::new();
            let mut used = vec![false; rows[0].len()];
            recurse(rows, 0, &mut used, 0, &mut out);
            out
        }

        fn assert_valid(rows: &[Vec<i64>], outcome: &SolveOutcome<i64>) {
            let assignment = outcome.assignment();
            assert_eq!(assignment.num_rows(), rows.len());

            let expected_assigned = rows.len().min(rows[0].len());
            assert_eq!(assignment.num_assigned(), expected_assigned);

            let mut used = vec![false; rows[0].len()];
            let mut total = 0i64;
            for (row, col) in assignment.columns().iter().enumerate() {
                if let Some(col) = col {
                    assert!(!used[col.get()], "column {} used twice", col.get());
                    used[col.get()] = true;
                    total += rows[row][col.get()];
                }
            }
            assert_eq!(total, assignment.objective_value());
        }

        #[test]
        fn test_random_square_instances_match_brute_force() {
            let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);

            for _ in 0..60 {
                let side = rng.random_range(2..=6);
                let rows = random_rows(&mut rng, side, side);

                let outcome = minimize().solve_rows(rows.clone()).unwrap();
                assert_valid(&rows, &outcome);

                let best = enumerate_objectives(&rows).into_iter().min().unwrap();
                assert_eq!(
                    outcome.assignment().objective_value(),
                    best,
                    "suboptimal on {:?}",
                    rows
                );
            }
        }

        #[test]
        fn test_random_wide_instances_match_brute_force() {
            let mut rng = ChaCha8Rng::seed_from_u64(0xBEEF);

            for _ in 0..60 {
                let num_rows = rng.random_range(1..=4);
                let num_cols = rng.random_range(num_rows..=7);
                let rows = random_rows(&mut rng, num_rows, num_cols);

                let outcome = minimize().solve_rows(rows.clone()).unwrap();
                assert_valid(&rows, &outcome);

                let best = enumerate_objectives(&rows).into_iter().min().unwrap();
                assert_eq!(outcome.assignment().objective_value(), best);
            }
        }

        #[test]
        fn test_random_maximize_matches_brute_force() {
            let mut rng = ChaCha8Rng::seed_from_u64(0xFACADE);

            for _ in 0..60 {
                let side = rng.random_range(2..=5);
                let rows = random_rows(&mut rng, side, side);

                let outcome = maximize().solve_rows(rows.clone()).unwrap();
                assert_valid(&rows, &outcome);

                let best = enumerate_objectives(&rows).into_iter().max().unwrap();
                assert_eq!(outcome.assignment().objective_value(), best);
            }
        }

        #[test]
        fn test_random_tall_instances_match_their_transpose() {
            let mut rng = ChaCha8Rng::seed_from_u64(0xDECADE);

            for _ in 0..60 {
                let num_cols = rng.random_range(1..=4);
                let num_rows = rng.random_range(num_cols..=7);
                let rows = random_rows(&mut rng, num_rows, num_cols);

                let transposed: Vec<Vec<i64>> = (0..num_cols)
                    .map(|c| (0..num_rows).map(|r| rows[r][c]).collect())
                    .collect();

                let tall = minimize().solve_rows(rows.clone()).unwrap();
                let wide = minimize().solve_rows(transposed).unwrap();

                assert_valid(&rows, &tall);
                assert_eq!(
                    tall.assignment().objective_value(),
                    wide.assignment().objective_value()
                );
            }
        }

        #[test]
        fn test_maximize_agrees_with_minimizing_the_flipped_matrix() {
            let mut rng = ChaCha8Rng::seed_from_u64(0x1DEA);

            for _ in 0..40 {
                let side = rng.random_range(2..=5);
                let rows = random_rows(&mut rng, side, side);

                let max_entry = rows.iter().flatten().copied().max().unwrap();
                let flipped: Vec<Vec<i64>> = rows
                    .iter()
                    .map(|row| row.iter().map(|&x| max_entry - x).collect())
                    .collect();

                let maximized = maximize().solve_rows(rows.clone()).unwrap();
                let minimized = minimize().solve_rows(flipped).unwrap();

                // The minimizing assignment of the flipped matrix, priced
                // against the original costs, must reach the same total.
                let total: i64 = minimized
                    .assignment()
                    .columns()
                    .iter()
                    .enumerate()
                    .map(|(r, col)| match col {
                        Some(col) => rows[r][col.get()],
                        None => 0,
                    })
                    .sum();

                assert_eq!(maximized.assignment().objective_value(), total);
            }
        }

        #[test]
        fn test_random_instances_with_negative_costs() {
            let mut rng = ChaCha8Rng::seed_from_u64(0xABBA);

            for _ in 0..40 {
                let side = rng.random_range(2..=5);
                let rows: Vec<Vec<i64>> = (0..side)
                    .map(|_| (0..side).map(|_| rng.random_range(-30..30)).collect())
                    .collect();

                let outcome = minimize().solve_rows(rows.clone()).unwrap();
                assert_valid(&rows, &outcome);

                let best = enumerate_objectives(&rows).into_iter().min().unwrap();
                assert_eq!(outcome.assignment().objective_value(), best);
            }
        }
    }
}
