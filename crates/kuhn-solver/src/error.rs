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

use kuhn_model::matrix::ShapeError;
use thiserror::Error;

/// Errors produced by a solve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The input rows did not form a valid cost matrix.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The dual adjustment loop hit its iteration cap without reaching a
    /// full line cover.
    #[error("line cover did not reach full size after {iterations} dual adjustments")]
    CoverStalled { iterations: u64 },

    /// An internal invariant did not hold. Always a bug in the solver.
    #[error("internal solver invariant violated: {0}")]
    Internal(&'static str),
}

/// Convenience alias for solver results.
pub type SolveResult<T> = Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_converts() {
        let err: SolveError = ShapeError::Empty.into();
        assert_eq!(err, SolveError::Shape(ShapeError::Empty));
    }

    #[test]
    fn test_display_messages() {
        let err = SolveError::CoverStalled { iterations: 16 };
        assert_eq!(
            format!("{}", err),
            "line cover did not reach full size after 16 dual adjustments"
        );

        let err = SolveError::Shape(ShapeError::Ragged {
            row: 2,
            expected: 4,
            got: 3,
        });
        assert_eq!(format!("{}", err), "row 2 has 3 columns but expected 4");
    }
}
