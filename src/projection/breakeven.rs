//! Break-even detection on a projected point sequence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::points::ProjectionPoint;

/// Fractional point in time where the annuity strategy catches up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Years after the start, linearly interpolated between whole years
    pub year: f64,

    /// start_age + year
    pub age: f64,
}

impl BreakEvenResult {
    /// Real lump-sum value at the break-even year, interpolated between the
    /// bracketing points. Used to place a marker on a chart without
    /// re-deriving the crossing from rendered output.
    pub fn interpolated_value(&self, points: &[ProjectionPoint]) -> Option<f64> {
        if self.year < 0.0 || !self.year.is_finite() {
            return None;
        }
        let lower = self.year.floor() as usize;
        let frac = self.year - lower as f64;

        let p0 = points.get(lower)?;
        if frac == 0.0 {
            return Some(p0.real_lump_sum_value);
        }
        let p1 = points.get(lower + 1)?;
        Some(p0.real_lump_sum_value + frac * (p1.real_lump_sum_value - p0.real_lump_sum_value))
    }
}

/// Find the first negative -> non-negative transition of `difference`.
///
/// Only strict transitions count: a sequence that starts at or above zero
/// reports nothing even if the annuity leads from the outset.
pub fn find_break_even(points: &[ProjectionPoint], start_age: u32) -> Option<BreakEvenResult> {
    points.windows(2).find_map(|pair| {
        let (prev, curr) = (&pair[0], &pair[1]);
        if !(prev.difference < 0.0 && curr.difference >= 0.0) {
            return None;
        }

        let (d0, d1) = (prev.difference, curr.difference);
        let frac = if d1 == d0 { 0.0 } else { -d0 / (d1 - d0) };
        let frac = frac.clamp(0.0, 1.0);

        let (t0, t1) = (prev.year as f64, curr.year as f64);
        let year = t0 + frac * (t1 - t0);

        Some(BreakEvenResult {
            year,
            age: start_age as f64 + year,
        })
    })
}

/// Status chip shown next to the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakEvenStatus {
    Reached(BreakEvenResult),
    NotWithinHorizon,
}

impl From<Option<BreakEvenResult>> for BreakEvenStatus {
    fn from(result: Option<BreakEvenResult>) -> Self {
        match result {
            Some(be) => BreakEvenStatus::Reached(be),
            None => BreakEvenStatus::NotWithinHorizon,
        }
    }
}

impl fmt::Display for BreakEvenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEvenStatus::Reached(be) => {
                write!(f, "Break-even at ~{:.1} yrs (age {:.1})", be.year, be.age)
            }
            BreakEvenStatus::NotWithinHorizon => write!(f, "No break-even within horizon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points_from(diffs: &[f64]) -> Vec<ProjectionPoint> {
        diffs
            .iter()
            .enumerate()
            .map(|(year, &difference)| ProjectionPoint {
                year: year as u32,
                age: 60 + year as u32,
                real_lump_sum_value: 100.0 + year as f64,
                real_annuity_value: 100.0 + year as f64 + difference,
                difference,
            })
            .collect()
    }

    #[test]
    fn test_interpolates_crossing() {
        let points = points_from(&[-30.0, -10.0, 30.0, 50.0]);
        let be = find_break_even(&points, 60).unwrap();
        assert_relative_eq!(be.year, 1.25);
        assert_relative_eq!(be.age, 61.25);
    }

    #[test]
    fn test_exact_zero_is_crossing() {
        let points = points_from(&[-5.0, 0.0, 5.0]);
        let be = find_break_even(&points, 60).unwrap();
        assert_relative_eq!(be.year, 1.0);
    }

    #[test]
    fn test_only_first_crossing_reported() {
        let points = points_from(&[-10.0, 10.0, -10.0, 10.0]);
        let be = find_break_even(&points, 60).unwrap();
        assert_relative_eq!(be.year, 0.5);
    }

    #[test]
    fn test_non_negative_start_reports_nothing() {
        assert!(find_break_even(&points_from(&[0.0, 10.0, 20.0]), 60).is_none());
        assert!(find_break_even(&points_from(&[5.0, -5.0, -1.0]), 60).is_none());
    }

    #[test]
    fn test_no_crossing() {
        assert!(find_break_even(&points_from(&[-30.0, -20.0, -10.0]), 60).is_none());
        assert!(find_break_even(&points_from(&[-1.0]), 60).is_none());
        assert!(find_break_even(&[], 60).is_none());
    }

    #[test]
    fn test_status_labels() {
        let reached = BreakEvenStatus::from(Some(BreakEvenResult { year: 13.6883, age: 73.6883 }));
        assert_eq!(reached.to_string(), "Break-even at ~13.7 yrs (age 73.7)");

        let missed = BreakEvenStatus::from(None);
        assert_eq!(missed.to_string(), "No break-even within horizon");
    }

    #[test]
    fn test_interpolated_value() {
        let points = points_from(&[-30.0, -10.0, 30.0]);
        let be = BreakEvenResult { year: 1.25, age: 61.25 };
        assert_relative_eq!(be.interpolated_value(&points).unwrap(), 101.25);

        let whole = BreakEvenResult { year: 2.0, age: 62.0 };
        assert_relative_eq!(whole.interpolated_value(&points).unwrap(), 102.0);

        let beyond = BreakEvenResult { year: 5.5, age: 65.5 };
        assert!(beyond.interpolated_value(&points).is_none());
    }
}
