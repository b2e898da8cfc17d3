//! Expected nominal returns by investor risk profile

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// Investor risk appetite used to pick an expected return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

/// Payout options the return table distinguishes between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutOption {
    LumpSum,
    PhasedWithdrawal,
    Annuity,
    JointLife,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    /// Expected annual nominal return for a payout option
    pub fn expected_return(&self, option: PayoutOption) -> f64 {
        // Annuity rates are contractual and do not depend on appetite
        match (self, option) {
            (_, PayoutOption::Annuity) | (_, PayoutOption::JointLife) => 0.04,
            (RiskProfile::Conservative, PayoutOption::LumpSum) => 0.06,
            (RiskProfile::Conservative, PayoutOption::PhasedWithdrawal) => 0.05,
            (RiskProfile::Moderate, PayoutOption::LumpSum) => 0.08,
            (RiskProfile::Moderate, PayoutOption::PhasedWithdrawal) => 0.07,
            (RiskProfile::Aggressive, PayoutOption::LumpSum) => 0.10,
            (RiskProfile::Aggressive, PayoutOption::PhasedWithdrawal) => 0.09,
        }
    }

    /// Return on an invested lump sum, used as the calculator's nominal return
    pub fn lump_sum_return(&self) -> f64 {
        self.expected_return(PayoutOption::LumpSum)
    }
}

impl FromStr for RiskProfile {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            _ => Err(PlannerError::UnknownRiskProfile(s.to_string())),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}
