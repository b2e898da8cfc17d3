//! Running state of both payout strategies during a projection

use crate::assumptions::CalculationParameters;

/// Real (today's money) value of each strategy at a point in time
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Years elapsed since the payout decision
    pub year: u32,

    /// Lump sum invested at the real return
    pub lump_accumulator: f64,

    /// All annuity receipts so far, each invested at the real return on arrival
    pub annuity_accumulator: f64,

    /// Sum of real annuity payments received (no growth)
    pub real_receipts: f64,

    /// Sum of nominal annuity payments received
    pub nominal_receipts: f64,

    /// One-period real growth factor (1 + real return)
    growth: f64,
}

impl ProjectionState {
    /// State at year 0: the lump sum is in hand, no annuity has been paid
    pub fn initial(params: &CalculationParameters, real_return: f64) -> Self {
        Self {
            year: 0,
            lump_accumulator: params.lump_sum,
            annuity_accumulator: 0.0,
            real_receipts: 0.0,
            nominal_receipts: 0.0,
            growth: 1.0 + real_return,
        }
    }

    /// Advance one year: grow both pots, then invest this year's payment
    pub fn advance_year(&mut self, params: &CalculationParameters) {
        self.year += 1;

        self.lump_accumulator *= self.growth;
        self.annuity_accumulator *= self.growth;

        let nominal = nominal_payment(params, self.year);
        let real = real_payment(params, self.year);

        self.annuity_accumulator += real;
        self.real_receipts += real;
        self.nominal_receipts += nominal;
    }

    /// Annuity strategy minus lump sum strategy
    pub fn difference(&self) -> f64 {
        self.annuity_accumulator - self.lump_accumulator
    }
}

/// Nominal annuity payment due at the end of `year` (1-indexed).
/// The first payment is unescalated.
pub fn nominal_payment(params: &CalculationParameters, year: u32) -> f64 {
    let steps = year.saturating_sub(1) as i32;
    params.annual_annuity * (1.0 + params.annuity_escalation_rate).powi(steps)
}

/// Nominal payment for `year` deflated by `year` years of inflation
pub fn real_payment(params: &CalculationParameters, year: u32) -> f64 {
    nominal_payment(params, year) / (1.0 + params.inflation_rate).powi(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_payment_unescalated() {
        let params = CalculationParameters::new(0.0, 1000.0, 10, 0.0, 0.0, 60).with_escalation(0.10);
        assert_relative_eq!(nominal_payment(&params, 1), 1000.0);
        assert_relative_eq!(nominal_payment(&params, 2), 1100.0);
        assert_relative_eq!(nominal_payment(&params, 3), 1210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_real_payment_deflates_by_year() {
        let params = CalculationParameters::new(0.0, 1050.0, 10, 0.0, 0.05, 60);
        assert_relative_eq!(real_payment(&params, 1), 1000.0, epsilon = 1e-9);
        assert_relative_eq!(real_payment(&params, 2), 1050.0 / 1.1025, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_year() {
        let params = CalculationParameters::new(1000.0, 100.0, 10, 0.10, 0.0, 60);
        let mut state = ProjectionState::initial(&params, 0.10);
        assert_eq!(state.difference(), -1000.0);

        state.advance_year(&params);
        assert_eq!(state.year, 1);
        assert_relative_eq!(state.lump_accumulator, 1100.0, epsilon = 1e-9);
        assert_relative_eq!(state.annuity_accumulator, 100.0, epsilon = 1e-9);

        state.advance_year(&params);
        assert_relative_eq!(state.lump_accumulator, 1210.0, epsilon = 1e-9);
        assert_relative_eq!(state.annuity_accumulator, 210.0, epsilon = 1e-9);
        assert_relative_eq!(state.real_receipts, 200.0, epsilon = 1e-9);
        assert_relative_eq!(state.nominal_receipts, 200.0, epsilon = 1e-9);
    }
}
