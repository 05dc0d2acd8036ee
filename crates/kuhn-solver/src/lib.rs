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

//! # Kuhn Solver
//!
//! An exact solver for the rectangular linear assignment problem based on
//! the Kuhn-Munkres (Hungarian) method: reduce the cost matrix, cover its
//! zeros with a minimum number of lines, adjust the duals until a full
//! cover exists, then extract a perfect zero matching.
//!
//! ## Highlights
//!
//! - Rectangular inputs: matrices are padded to a square with zero-cost
//!   dummy lines, rows matched to dummy columns come back unassigned.
//! - Minimization and maximization over the same pipeline via a
//!   `max - x` transform of the working copy.
//! - Minimum line covers computed from a maximum matching over the zero
//!   pattern, so the cover count is exact and the outer loop terminates.
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

pub mod adjust;
pub mod cover;
pub mod error;
pub mod extract;
pub mod matching;
pub mod reduction;
pub mod solver;
pub mod stats;
