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

//! Solves a few assignment instances and prints the outcomes. Run with
//! `RUST_LOG=kuhn_solver=trace` to watch the cover/adjust loop work.

use kuhn_solver::{
    error::SolveResult,
    solver::{Direction, SolverBuilder},
};
use tracing_subscriber::EnvFilter;

fn main() -> SolveResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let solver = SolverBuilder::new()
        .with_direction(Direction::Minimize)
        .build();

    // A square instance.
    let outcome = solver.solve_rows(vec![
        vec![46, 31, 89, 56, 69],
        vec![64, 57, 9, 44, 68],
        vec![51, 28, 46, 41, 61],
        vec![57, 22, 50, 38, 91],
        vec![65, 53, 73, 5, 71],
    ])?;
    println!("{}", outcome);

    // More columns than rows: every row is assigned, surplus columns idle.
    let outcome = solver.solve_rows(vec![
        vec![35, 7, 97, 60, 60, 50, 66],
        vec![20, 91, 94, 9, 3, 78, 24],
        vec![65, 2, 61, 25, 79, 83, 98],
    ])?;
    println!("{}", outcome);

    // More rows than columns: one row comes back unassigned.
    let outcome = solver.solve_rows(vec![
        vec![0, 83, 69],
        vec![77, 0, 0],
        vec![11, 0, 0],
        vec![0, 9, 98],
    ])?;
    println!("{}", outcome);

    Ok(())
}
