//! Monthly income comparison across payout options
//!
//! Compares, net of income tax, the monthly income a retiree gets from:
//! - drawing a lump sum down to zero over a fixed term
//! - an annuity paying a fixed share of the corpus each year
//! - a phased withdrawal of a smaller fixed share

mod tax;

pub use tax::{income_tax, TaxBracket, TaxSchedule};

use serde::{Deserialize, Serialize};

use crate::assumptions::PayoutOption;
use crate::error::{PlannerError, Result};

/// Annual annuity payout as a share of the corpus
pub const ANNUITY_PAYOUT_RATE: f64 = 0.06;

/// Annual phased withdrawal as a share of the corpus
pub const PHASED_WITHDRAWAL_RATE: f64 = 0.05;

/// Level monthly payment that exhausts `corpus` over `years` at `annual_return`
/// (compounded monthly, payments at month end)
pub fn lump_sum_to_monthly(corpus: f64, years: u32, annual_return: f64) -> f64 {
    if years == 0 {
        return 0.0;
    }
    let months = years as f64 * 12.0;

    let r = annual_return / 12.0;
    if r.abs() < 1e-12 {
        return corpus / months;
    }

    corpus * r / (1.0 - (1.0 + r).powf(-months))
}

/// Inputs for a payout comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutComparisonConfig {
    /// Retirement corpus
    pub corpus: f64,

    /// Drawdown term for the lump sum option
    pub years: u32,

    /// Return earned on the undrawn lump sum
    pub annual_return: f64,
}

impl Default for PayoutComparisonConfig {
    fn default() -> Self {
        Self {
            corpus: 10_000_000.0,
            years: 25,
            annual_return: 0.06,
        }
    }
}

impl PayoutComparisonConfig {
    /// Longest drawdown term the CLI accepts
    pub const MAX_YEARS: u32 = 100;

    pub fn validate(&self) -> Result<()> {
        if !self.corpus.is_finite() || self.corpus < 0.0 {
            return Err(PlannerError::invalid(
                "corpus",
                format!("must be a finite amount >= 0, got {}", self.corpus),
            ));
        }
        if self.years == 0 || self.years > Self::MAX_YEARS {
            return Err(PlannerError::invalid(
                "years",
                format!("must be within 1..={}, got {}", Self::MAX_YEARS, self.years),
            ));
        }
        if !self.annual_return.is_finite() || self.annual_return <= -12.0 {
            return Err(PlannerError::invalid(
                "annual_return",
                format!("must be a finite rate above -1200%, got {}", self.annual_return),
            ));
        }
        Ok(())
    }
}

/// Income from one payout option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutRow {
    pub option: PayoutOption,
    pub monthly_gross: f64,
    pub monthly_net: f64,
    pub annual_tax: f64,
}

impl PayoutRow {
    fn from_annual_gross(option: PayoutOption, annual_gross: f64, schedule: &TaxSchedule) -> Self {
        let annual_tax = schedule.tax(annual_gross);
        Self {
            option,
            monthly_gross: annual_gross / 12.0,
            monthly_net: (annual_gross - annual_tax) / 12.0,
            annual_tax,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.option {
            PayoutOption::LumpSum => "Lump Sum",
            PayoutOption::Annuity => "Annuity",
            PayoutOption::PhasedWithdrawal => "Phased Withdrawal",
            PayoutOption::JointLife => "Joint Life",
        }
    }
}

/// Lump sum, annuity and phased withdrawal rows under `schedule`
pub fn compare_payouts_with(config: &PayoutComparisonConfig, schedule: &TaxSchedule) -> Vec<PayoutRow> {
    let lump_annual = lump_sum_to_monthly(config.corpus, config.years, config.annual_return) * 12.0;

    vec![
        PayoutRow::from_annual_gross(PayoutOption::LumpSum, lump_annual, schedule),
        PayoutRow::from_annual_gross(
            PayoutOption::Annuity,
            config.corpus * ANNUITY_PAYOUT_RATE,
            schedule,
        ),
        PayoutRow::from_annual_gross(
            PayoutOption::PhasedWithdrawal,
            config.corpus * PHASED_WITHDRAWAL_RATE,
            schedule,
        ),
    ]
}

/// Payout rows under the default tax schedule
pub fn compare_payouts(config: &PayoutComparisonConfig) -> Vec<PayoutRow> {
    compare_payouts_with(config, &TaxSchedule::default())
}
