use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("breakpoint table needs at least one point")]
    EmptyTable,
    #[error("breakpoint {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("breakpoint {index} has an input lower than the one before it")]
    Unordered { index: usize },
}

/// Ordered `(input, output)` control points mapping a progress scalar to a
/// style value.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    points: Vec<(f64, f64)>,
}

impl BreakpointTable {
    pub fn new(points: &[(f64, f64)]) -> Result<Self, MotionError> {
        if points.is_empty() {
            return Err(MotionError::EmptyTable);
        }
        for (index, (x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(MotionError::NonFinite { index });
            }
            if index > 0 && *x < points[index - 1].0 {
                return Err(MotionError::Unordered { index });
            }
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    /// Builds a table from parallel input/output lists, the way scroll
    /// transforms are usually written (`[0, 0.5, 1] -> [1, 0.8, 0.6]`).
    pub fn from_ranges(inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        let points: Vec<(f64, f64)> = inputs
            .iter()
            .copied()
            .zip(outputs.iter().copied())
            .collect();
        Self::new(&points)
    }

    /// Maps [0,1] onto `from..to`.
    pub fn linear(from: f64, to: f64) -> Self {
        Self {
            points: vec![(0.0, from), (1.0, to)],
        }
    }

    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    /// Same as `from_ranges`, but an invalid table is logged and replaced by
    /// a constant holding `fallback`.
    pub fn or_constant(inputs: &[f64], outputs: &[f64], fallback: f64) -> Self {
        Self::from_ranges(inputs, outputs).unwrap_or_else(|err| {
            log::warn!("Invalid breakpoint table, holding {}: {}", fallback, err);
            Self::constant(fallback)
        })
    }

    pub fn sample(&self, progress: f64) -> f64 {
        interpolate(progress, &self.points)
    }
}

/// Piecewise-linear lookup, clamped to the first and last outputs.
///
/// `breakpoints` must be non-empty with non-decreasing inputs; an empty slice
/// yields 0.0. NaN progress clamps to the first output.
pub fn interpolate(progress: f64, breakpoints: &[(f64, f64)]) -> f64 {
    let (first, last) = match (breakpoints.first(), breakpoints.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };

    if progress.is_nan() || progress <= first.0 {
        return first.1;
    }
    if progress >= last.0 {
        return last.1;
    }

    // first index whose input is above progress; always in 1..len here
    let upper = breakpoints.partition_point(|(x, _)| *x <= progress);
    let (x0, y0) = breakpoints[upper - 1];
    let (x1, y1) = breakpoints[upper];
    if x1 == x0 {
        return y1;
    }
    y0 + (progress - x0) / (x1 - x0) * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamps_below_first_breakpoint() {
        let bp = [(0.2, 10.0), (0.8, 50.0)];
        assert_eq!(interpolate(0.2, &bp), 10.0);
        assert_eq!(interpolate(-3.0, &bp), 10.0);
        assert_eq!(interpolate(f64::NEG_INFINITY, &bp), 10.0);
    }

    #[test]
    fn clamps_above_last_breakpoint() {
        let bp = [(0.0, 1.0), (0.5, 0.8), (1.0, 0.6)];
        assert_eq!(interpolate(1.0, &bp), 0.6);
        assert_eq!(interpolate(7.5, &bp), 0.6);
    }

    #[test]
    fn interpolates_between_bracketing_pair() {
        let bp = [(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];
        assert!(close(interpolate(0.1, &bp), 0.5));
        assert!(close(interpolate(0.5, &bp), 1.0));
        assert!(close(interpolate(0.9, &bp), 0.5));

        let bp = [(0.25, 100.0), (0.75, -100.0)];
        let p: f64 = 0.4;
        let expected = 100.0 + (p - 0.25) / (0.75 - 0.25) * (-100.0 - 100.0);
        assert!(close(interpolate(p, &bp), expected));
    }

    #[test]
    fn repeated_input_jumps_to_later_output() {
        let bp = [(0.0, 0.0), (0.5, 1.0), (0.5, 5.0), (1.0, 6.0)];
        assert!(close(interpolate(0.25, &bp), 0.5));
        assert!(close(interpolate(0.5, &bp), 5.0));
        assert!(close(interpolate(0.75, &bp), 5.5));
    }

    #[test]
    fn single_point_table_is_constant() {
        let table = BreakpointTable::constant(0.3);
        assert_eq!(table.sample(0.0), 0.3);
        assert_eq!(table.sample(0.99), 0.3);
    }

    #[test]
    fn nan_progress_holds_first_output() {
        let table = BreakpointTable::linear(4.0, 0.0);
        assert_eq!(table.sample(f64::NAN), 4.0);
    }

    #[test]
    fn rejects_invalid_tables() {
        assert_eq!(BreakpointTable::new(&[]), Err(MotionError::EmptyTable));
        assert_eq!(
            BreakpointTable::new(&[(0.0, 1.0), (f64::NAN, 2.0)]),
            Err(MotionError::NonFinite { index: 1 })
        );
        assert_eq!(
            BreakpointTable::new(&[(0.0, 1.0), (0.6, 2.0), (0.4, 3.0)]),
            Err(MotionError::Unordered { index: 2 })
        );
    }

    #[test]
    fn from_ranges_pairs_inputs_with_outputs() {
        let table = BreakpointTable::from_ranges(&[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8]).unwrap();
        assert_eq!(
            table,
            BreakpointTable::new(&[(0.0, 0.8), (0.5, 1.0), (1.0, 0.8)]).unwrap()
        );
        assert!(close(table.sample(0.25), 0.9));
    }

    #[test]
    fn or_constant_falls_back_on_bad_input() {
        let table = BreakpointTable::or_constant(&[1.0, 0.0], &[0.0, 1.0], 0.5);
        assert_eq!(table, BreakpointTable::constant(0.5));
    }
}
