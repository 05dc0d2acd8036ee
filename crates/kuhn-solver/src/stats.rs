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

/// Statistics collected during a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Number of cover/adjust rounds of the outer loop.
    pub outer_iterations: u64,
    /// Number of dual adjustments applied.
    pub adjustments: u64,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Outer Iterations: {}", self.outer_iterations)?;
        writeln!(f, "  Dual Adjustments: {}", self.adjustments)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolveStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatisticsBuilder {
    outer_iterations: u64,
    adjustments: u64,
    solve_duration: std::time::Duration,
}

impl Default for SolveStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveStatisticsBuilder {
    /// Creates a new `SolveStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            outer_iterations: 0,
            adjustments: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of outer loop iterations.
    #[inline]
    pub fn outer_iterations(mut self, outer_iterations: u64) -> Self {
        self.outer_iterations = outer_iterations;
        self
    }

    /// Sets the number of dual adjustments applied.
    #[inline]
    pub fn adjustments(mut self, adjustments: u64) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolveStatistics` instance.
    #[inline]
    pub fn build(self) -> SolveStatistics {
        SolveStatistics {
            outer_iterations: self.outer_iterations,
            adjustments: self.adjustments,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SolveStatisticsBuilder::new()
            .outer_iterations(5)
            .adjustments(4)
            .solve_duration(Duration::from_millis(250))
            .build();

        assert_eq!(stats.outer_iterations, 5);
        assert_eq!(stats.adjustments, 4);
        assert_eq!(stats.solve_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolveStatistics {
            outer_iterations: 3,
            adjustments: 2,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Solve Statistics:"), "missing header");
        assert!(
            rendered.contains("Outer Iterations: 3"),
            "missing outer_iterations"
        );
        assert!(
            rendered.contains("Dual Adjustments: 2"),
            "missing adjustments"
        );
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
