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

//! # Kuhn Model
//!
//! Data model for the rectangular linear assignment problem: a dense,
//! validated cost matrix, the typed row/column index spaces over it, and the
//! assignment returned by the solver.
//!
//! ## Modules
//!
//! - `index`: `RowIndex` and `ColumnIndex`, phantom-tagged typed indices.
//! - `matrix`: `CostMatrix<T>`, a dense row-major matrix with shape
//!   validation at construction and in-place square padding.
//! - `assignment`: `Assignment<T>`, the per-row matching plus its objective
//!   value as computed against the original (unpadded) cost matrix.

pub mod assignment;
pub mod index;
pub mod matrix;
