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

//! # Cost Scalar Trait
//!
//! Unified numeric bounds for cost matrix entries. `CostScalar` specifies
//! the capabilities the assignment engine requires from a cost type:
//! ring arithmetic (`num_traits::Num`), a total-enough order (`PartialOrd`),
//! cheap copying, and formatting.
//!
//! ## Motivation
//!
//! The reduction and dual-adjustment passes should remain generic over the
//! cost representation: floating point costs (`f32`, `f64`) are the common
//! case, but exact integer costs are equally valid and make the termination
//! argument of the outer loop airtight. Collecting the bounds into a single
//! alias keeps the generic signatures of the engine readable.
//!
//! ## Note on floats
//!
//! The engine compares entries against `T::zero()` exactly. This mirrors the
//! arithmetic it performs: a row minimum subtracted from the row turns the
//! minimal entry into an exact IEEE zero (`x - x == 0`), so no epsilon is
//! needed for the zeros the algorithm itself creates.

use num_traits::Num;

/// A trait alias for numeric types usable as cost matrix entries.
///
/// Implemented automatically for every type satisfying the bounds, which
/// covers `f32`, `f64` and the signed integer primitives.
pub trait CostScalar:
    Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> CostScalar for T where
    T: Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cost_scalar<T: CostScalar>() {}

    #[test]
    fn test_primitive_types_are_cost_scalars() {
        assert_cost_scalar::<f32>();
        assert_cost_scalar::<f64>();
        assert_cost_scalar::<i32>();
        assert_cost_scalar::<i64>();
    }
}
