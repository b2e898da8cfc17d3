//! Retirement corpus projection: accumulate until retirement, then draw down
//!
//! Before retirement the corpus grows and receives a yearly contribution.
//! After retirement a fixed share of the peak corpus is withdrawn each year
//! and the remainder grows at the post-retirement rate, never below zero.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Inputs for a two-phase corpus projection. Rates are annual fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusProjectionConfig {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,

    /// Savings already in hand at the current age
    pub initial_savings: f64,

    /// Added at the end of every accumulation year
    pub annual_contribution: f64,

    /// Growth while still working
    pub growth_rate: f64,

    /// Yearly withdrawal as a share of the corpus at retirement
    pub withdrawal_rate: f64,

    /// Growth of the remaining corpus after retirement
    pub post_retirement_growth_rate: f64,
}

impl Default for CorpusProjectionConfig {
    fn default() -> Self {
        Self {
            current_age: 25,
            retirement_age: 60,
            life_expectancy: 85,
            initial_savings: 200_000.0,
            annual_contribution: 10_000.0,
            growth_rate: 0.06,
            withdrawal_rate: 0.06,
            post_retirement_growth_rate: 0.04,
        }
    }
}

/// Rate adjustments applied on top of the base configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorpusCase {
    Base,
    /// +2% growth, +1% post-retirement growth
    Best,
    /// -2% growth, +1% withdrawal, -1% post-retirement growth
    Worst,
}

impl CorpusCase {
    pub const ALL: [CorpusCase; 3] = [CorpusCase::Base, CorpusCase::Best, CorpusCase::Worst];

    pub fn apply(&self, config: &CorpusProjectionConfig) -> CorpusProjectionConfig {
        match self {
            CorpusCase::Base => *config,
            CorpusCase::Best => CorpusProjectionConfig {
                growth_rate: config.growth_rate + 0.02,
                post_retirement_growth_rate: config.post_retirement_growth_rate + 0.01,
                ..*config
            },
            CorpusCase::Worst => CorpusProjectionConfig {
                growth_rate: config.growth_rate - 0.02,
                withdrawal_rate: config.withdrawal_rate + 0.01,
                post_retirement_growth_rate: config.post_retirement_growth_rate - 0.01,
                ..*config
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorpusCase::Base => "Base Case",
            CorpusCase::Best => "Best Case (Optimistic)",
            CorpusCase::Worst => "Worst Case (Pessimistic)",
        }
    }
}

/// Corpus at the end of the year the holder turns `age`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusPoint {
    pub age: u32,
    pub corpus: f64,
    pub retired: bool,
}

impl CorpusProjectionConfig {
    /// Ages must be ordered current <= retirement <= life expectancy
    pub fn validate(&self) -> Result<()> {
        if self.retirement_age < self.current_age {
            return Err(PlannerError::invalid(
                "retirement_age",
                format!("must be >= current age {}, got {}", self.current_age, self.retirement_age),
            ));
        }
        if self.life_expectancy < self.retirement_age {
            return Err(PlannerError::invalid(
                "life_expectancy",
                format!(
                    "must be >= retirement age {}, got {}",
                    self.retirement_age, self.life_expectancy
                ),
            ));
        }
        Ok(())
    }

    /// Project from the current age to life expectancy, one point per age.
    ///
    /// Out-of-order ages are pulled into line rather than rejected; call
    /// `validate` first to refuse them instead.
    pub fn project(&self) -> Vec<CorpusPoint> {
        let retirement_age = self.retirement_age.max(self.current_age);
        let life_expectancy = self.life_expectancy.max(retirement_age);

        let mut points = Vec::with_capacity((life_expectancy - self.current_age) as usize + 1);
        let mut corpus = self.initial_savings;
        points.push(CorpusPoint {
            age: self.current_age,
            corpus,
            retired: false,
        });

        for age in self.current_age + 1..=retirement_age {
            corpus = corpus * (1.0 + self.growth_rate) + self.annual_contribution;
            points.push(CorpusPoint { age, corpus, retired: false });
        }

        let withdrawal = corpus * self.withdrawal_rate;
        for age in retirement_age + 1..=life_expectancy {
            corpus = ((corpus - withdrawal) * (1.0 + self.post_retirement_growth_rate)).max(0.0);
            points.push(CorpusPoint { age, corpus, retired: true });
        }

        points
    }

    /// Base, best and worst case projections
    pub fn project_cases(&self) -> Vec<(CorpusCase, Vec<CorpusPoint>)> {
        CorpusCase::ALL
            .iter()
            .map(|case| (*case, case.apply(self).project()))
            .collect()
    }
}

/// First age at which the corpus is exhausted, if it runs out
pub fn depletion_age(points: &[CorpusPoint]) -> Option<u32> {
    points
        .iter()
        .find(|p| p.retired && p.corpus <= 0.0)
        .map(|p| p.age)
}
