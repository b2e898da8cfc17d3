//! Output structures for break-even projections

use serde::{Deserialize, Serialize};

use super::breakeven::{BreakEvenResult, BreakEvenStatus};

/// One year of a projection, all values in today's money
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub age: u32,
    pub real_lump_sum_value: f64,
    pub real_annuity_value: f64,
    /// real_annuity_value - real_lump_sum_value
    pub difference: f64,
}

/// Complete result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenProjection {
    /// Points for years 0..=horizon
    pub points: Vec<ProjectionPoint>,

    /// First crossing of the annuity over the lump sum, if any
    pub break_even: Option<BreakEvenResult>,

    /// (1 + nominal) / (1 + inflation) - 1
    pub real_return: f64,

    /// Sum of real annuity payments, before any investment growth
    pub total_real_receipts: f64,

    /// Sum of nominal annuity payments
    pub total_nominal_receipts: f64,
}

impl BreakEvenProjection {
    pub fn status(&self) -> BreakEvenStatus {
        BreakEvenStatus::from(self.break_even)
    }

    /// Final point of the projection
    pub fn last_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.last_point();

        ProjectionSummary {
            horizon_years: last.map(|p| p.year).unwrap_or(0),
            final_real_lump_sum: last.map(|p| p.real_lump_sum_value).unwrap_or(0.0),
            final_real_annuity: last.map(|p| p.real_annuity_value).unwrap_or(0.0),
            final_difference: last.map(|p| p.difference).unwrap_or(0.0),
            total_real_receipts: self.total_real_receipts,
            total_nominal_receipts: self.total_nominal_receipts,
            break_even_year: self.break_even.map(|be| be.year),
            break_even_age: self.break_even.map(|be| be.age),
            real_return: self.real_return,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub final_real_lump_sum: f64,
    pub final_real_annuity: f64,
    pub final_difference: f64,
    pub total_real_receipts: f64,
    pub total_nominal_receipts: f64,
    pub break_even_year: Option<f64>,
    pub break_even_age: Option<f64>,
    pub real_return: f64,
}

impl ProjectionSummary {
    /// Which strategy is ahead at the end of the horizon
    pub fn annuity_ahead_at_horizon(&self) -> bool {
        self.final_difference >= 0.0
    }
}
