//! Core break-even calculator for lump sum vs annuity projections

use crate::assumptions::CalculationParameters;
use super::breakeven::find_break_even;
use super::points::{BreakEvenProjection, ProjectionPoint};
use super::state::ProjectionState;

/// Real (inflation-adjusted) rate of return. Negative when inflation
/// outruns the nominal return.
pub fn real_return_rate(nominal_return_rate: f64, inflation_rate: f64) -> f64 {
    (1.0 + nominal_return_rate) / (1.0 + inflation_rate) - 1.0
}

/// Compare taking a lump sum against taking an annuity, in real terms.
///
/// Both strategies compound at the real return. Each annuity payment is
/// deflated to today's money and invested the moment it is received. The
/// calculator does no validation: the horizon is used as given and every
/// numeric input produces an output.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEvenCalculator;

impl BreakEvenCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Project years 0..=horizon and locate the first break-even
    pub fn compute(&self, params: &CalculationParameters) -> BreakEvenProjection {
        let real_return = real_return_rate(params.nominal_return_rate, params.inflation_rate);
        let mut state = ProjectionState::initial(params, real_return);

        let mut points = Vec::with_capacity(params.horizon_years as usize + 1);
        points.push(Self::point(params, &state));

        for _year in 1..=params.horizon_years {
            state.advance_year(params);
            points.push(Self::point(params, &state));
        }

        let break_even = find_break_even(&points, params.start_age);

        log::debug!(
            "projected {} years at real return {:.6}: break-even {:?}",
            params.horizon_years,
            real_return,
            break_even.map(|be| be.year)
        );

        BreakEvenProjection {
            points,
            break_even,
            real_return,
            total_real_receipts: state.real_receipts,
            total_nominal_receipts: state.nominal_receipts,
        }
    }

    fn point(params: &CalculationParameters, state: &ProjectionState) -> ProjectionPoint {
        ProjectionPoint {
            year: state.year,
            age: params.start_age + state.year,
            real_lump_sum_value: state.lump_accumulator,
            real_annuity_value: state.annuity_accumulator,
            difference: state.difference(),
        }
    }
}

/// Shorthand for `BreakEvenCalculator::new().compute(params)`
pub fn compute(params: &CalculationParameters) -> BreakEvenProjection {
    BreakEvenCalculator::new().compute(params)
}
