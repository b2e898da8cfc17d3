//! Scenario runner for batch break-even projections
//!
//! Every projection is independent, so batches are spread across threads
//! with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{CalculationParameters, NamedScenario, RiskProfile};
use crate::projection::{BreakEvenCalculator, BreakEvenProjection, ProjectionSummary};

/// Summary of one named scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub id: String,
    pub params: CalculationParameters,
    pub summary: ProjectionSummary,
}

/// Runs the calculator over many parameter sets
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let sweep = runner.escalation_sweep(&CalculationParameters::default(), &[0.0, 0.05, 0.10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: BreakEvenCalculator,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            calculator: BreakEvenCalculator::new(),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &CalculationParameters) -> BreakEvenProjection {
        self.calculator.compute(params)
    }

    /// Run named scenarios in parallel, keeping input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        log::info!("running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                id: scenario.id.clone(),
                params: scenario.params,
                summary: self.calculator.compute(&scenario.params).summary(),
            })
            .collect()
    }

    /// Re-run `base` once per escalation rate
    pub fn escalation_sweep(
        &self,
        base: &CalculationParameters,
        escalation_rates: &[f64],
    ) -> Vec<BreakEvenProjection> {
        escalation_rates
            .iter()
            .map(|&rate| self.calculator.compute(&base.with_escalation(rate)))
            .collect()
    }

    /// First escalation rate, in slice order, whose projection reaches
    /// break-even within the horizon
    pub fn first_escalation_reaching_break_even(
        &self,
        base: &CalculationParameters,
        escalation_rates: &[f64],
    ) -> Option<f64> {
        escalation_rates.iter().copied().find(|&rate| {
            self.calculator
                .compute(&base.with_escalation(rate))
                .break_even
                .is_some()
        })
    }

    /// Re-run `base` with the lump-sum return of each risk profile
    pub fn risk_profiles(&self, base: &CalculationParameters) -> Vec<(RiskProfile, BreakEvenProjection)> {
        RiskProfile::ALL
            .iter()
            .map(|&profile| {
                let params = CalculationParameters {
                    nominal_return_rate: profile.lump_sum_return(),
                    ..*base
                };
                (profile, self.calculator.compute(&params))
            })
            .collect()
    }
}
