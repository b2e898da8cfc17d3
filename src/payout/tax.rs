//! Slab income tax applied to retirement income

use serde::{Deserialize, Serialize};

/// One slab: income up to `limit` is taxed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub limit: f64,
    pub rate: f64,
}

/// Progressive slab schedule, brackets sorted by ascending limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// New tax regime, FY 2025
    pub fn new_regime_fy2025() -> Self {
        let slabs = [
            (300_000.0, 0.0),
            (700_000.0, 0.05),
            (1_000_000.0, 0.10),
            (1_200_000.0, 0.15),
            (1_500_000.0, 0.20),
            (f64::INFINITY, 0.30),
        ];
        Self {
            brackets: slabs
                .iter()
                .map(|&(limit, rate)| TaxBracket { limit, rate })
                .collect(),
        }
    }

    /// Annual tax due on `income`. Zero or negative income owes nothing.
    pub fn tax(&self, income: f64) -> f64 {
        let mut tax = 0.0;
        let mut lower = 0.0;

        for bracket in &self.brackets {
            if income <= lower {
                break;
            }
            let taxable = income.min(bracket.limit) - lower;
            tax += taxable * bracket.rate;
            lower = bracket.limit;
        }

        tax
    }

    /// Tax as a share of income
    pub fn effective_rate(&self, income: f64) -> f64 {
        if income <= 0.0 {
            0.0
        } else {
            self.tax(income) / income
        }
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::new_regime_fy2025()
    }
}

/// Tax on `income` under the default schedule
pub fn income_tax(income: f64) -> f64 {
    TaxSchedule::default().tax(income)
}
