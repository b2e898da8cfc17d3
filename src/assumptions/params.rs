//! Calculation parameters for a lump sum vs annuity comparison

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Shortest projection horizon accepted by the calculator
pub const MIN_HORIZON_YEARS: u32 = 1;

/// Longest projection horizon accepted by the calculator
pub const MAX_HORIZON_YEARS: u32 = 60;

/// Clamp a requested horizon into [MIN_HORIZON_YEARS, MAX_HORIZON_YEARS]
pub fn clamp_horizon(years: u32) -> u32 {
    let clamped = years.clamp(MIN_HORIZON_YEARS, MAX_HORIZON_YEARS);
    if clamped != years {
        log::warn!("horizon of {} years clamped to {}", years, clamped);
    }
    clamped
}

/// Inputs to a single break-even calculation
///
/// All rates are annual and expressed as fractions (0.08 = 8%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    /// One-time payout available at retirement
    pub lump_sum: f64,

    /// Nominal annuity payment received at the end of year 1
    pub annual_annuity: f64,

    /// Number of years to project (clamped by the constructors)
    pub horizon_years: u32,

    /// Nominal investment return, may be negative
    pub nominal_return_rate: f64,

    /// Inflation rate used to deflate everything into today's money
    pub inflation_rate: f64,

    /// Nominal step-up applied to each successive annuity payment
    #[serde(default)]
    pub annuity_escalation_rate: f64,

    /// Age at year 0, only used for labelling
    pub start_age: u32,
}

impl CalculationParameters {
    /// Build parameters with no annuity escalation; the horizon is clamped.
    pub fn new(
        lump_sum: f64,
        annual_annuity: f64,
        horizon_years: u32,
        nominal_return_rate: f64,
        inflation_rate: f64,
        start_age: u32,
    ) -> Self {
        Self {
            lump_sum,
            annual_annuity,
            horizon_years: clamp_horizon(horizon_years),
            nominal_return_rate,
            inflation_rate,
            annuity_escalation_rate: 0.0,
            start_age,
        }
    }

    /// Same parameters with a different escalation rate
    pub fn with_escalation(mut self, annuity_escalation_rate: f64) -> Self {
        self.annuity_escalation_rate = annuity_escalation_rate;
        self
    }

    /// Same parameters with a different (clamped) horizon
    pub fn with_horizon(mut self, horizon_years: u32) -> Self {
        self.horizon_years = clamp_horizon(horizon_years);
        self
    }

    /// Build from dashboard-style percentage inputs (8.0 = 8%)
    pub fn from_percentages(
        lump_sum: f64,
        annual_annuity: f64,
        horizon_years: u32,
        nominal_return_pct: f64,
        inflation_pct: f64,
        annuity_escalation_pct: f64,
        start_age: u32,
    ) -> Self {
        Self::new(
            lump_sum,
            annual_annuity,
            horizon_years,
            nominal_return_pct / 100.0,
            inflation_pct / 100.0,
            start_age,
        )
        .with_escalation(annuity_escalation_pct / 100.0)
    }

    /// Caller-side range checks.
    ///
    /// The calculator accepts anything; this is for loaders and the CLI,
    /// which reject inputs the dashboard controls could never produce.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("lump_sum", self.lump_sum)?;
        check_non_negative("annual_annuity", self.annual_annuity)?;
        check_rate("nominal_return_rate", self.nominal_return_rate)?;
        check_rate("inflation_rate", self.inflation_rate)?;
        check_rate("annuity_escalation_rate", self.annuity_escalation_rate)?;

        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return Err(PlannerError::invalid(
                "horizon_years",
                format!(
                    "must be within {}..={}, got {}",
                    MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, self.horizon_years
                ),
            ));
        }

        Ok(())
    }
}

impl Default for CalculationParameters {
    /// Dashboard starting point: 50L lump sum vs 3.5L/yr annuity at age 60
    fn default() -> Self {
        Self::new(5_000_000.0, 350_000.0, 35, 0.08, 0.05, 60)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::invalid(
            field,
            format!("must be a finite amount >= 0, got {}", value),
        ));
    }
    Ok(())
}

// 1 + rate must stay positive: it is used as a growth factor and a divisor
fn check_rate(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= -1.0 {
        return Err(PlannerError::invalid(
            field,
            format!("must be a finite rate above -100%, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_horizon() {
        assert_eq!(clamp_horizon(0), 1);
        assert_eq!(clamp_horizon(1), 1);
        assert_eq!(clamp_horizon(35), 35);
        assert_eq!(clamp_horizon(60), 60);
        assert_eq!(clamp_horizon(75), 60);
    }

    #[test]
    fn test_constructors_clamp_horizon() {
        let params = CalculationParameters::new(1.0, 1.0, 0, 0.0, 0.0, 60);
        assert_eq!(params.horizon_years, 1);

        let params = params.with_horizon(120);
        assert_eq!(params.horizon_years, 60);
    }

    #[test]
    fn test_default_matches_dashboard() {
        let params = CalculationParameters::default();
        assert_eq!(params.lump_sum, 5_000_000.0);
        assert_eq!(params.annual_annuity, 350_000.0);
        assert_eq!(params.horizon_years, 35);
        assert_eq!(params.start_age, 60);
        assert_eq!(params.annuity_escalation_rate, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_from_percentages() {
        let params =
            CalculationParameters::from_percentages(100.0, 10.0, 20, 8.0, 5.0, 10.0, 65);
        assert_relative_eq!(params.nominal_return_rate, 0.08);
        assert_relative_eq!(params.inflation_rate, 0.05);
        assert_relative_eq!(params.annuity_escalation_rate, 0.10);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let base = CalculationParameters::default();

        let negative_lump = CalculationParameters { lump_sum: -1.0, ..base };
        assert!(matches!(
            negative_lump.validate(),
            Err(PlannerError::InvalidParameter { field: "lump_sum", .. })
        ));

        let nan_annuity = CalculationParameters { annual_annuity: f64::NAN, ..base };
        assert!(nan_annuity.validate().is_err());

        let total_deflation = CalculationParameters { inflation_rate: -1.0, ..base };
        assert!(total_deflation.validate().is_err());

        let no_horizon = CalculationParameters { horizon_years: 0, ..base };
        assert!(no_horizon.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_negative_returns() {
        let params = CalculationParameters {
            nominal_return_rate: -0.05,
            ..CalculationParameters::default()
        };
        assert!(params.validate().is_ok());
    }
}
