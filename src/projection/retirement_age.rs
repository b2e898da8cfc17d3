//! Retirement age scoring
//!
//! Working longer grows the corpus but leaves fewer years to spend it. Each
//! candidate age is scored as `(1 + r)^(age - min_age) * years_left`.

use serde::{Deserialize, Serialize};

/// Score of one candidate retirement age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementAgeScore {
    pub age: u32,
    pub years_left: u32,
    /// Corpus growth factor relative to retiring at the earliest age
    pub growth: f64,
    pub utility: f64,
}

/// Scores for every age in `min_age..=life_expectancy`
pub fn score_retirement_ages(min_age: u32, life_expectancy: u32, annual_return: f64) -> Vec<RetirementAgeScore> {
    (min_age..=life_expectancy)
        .map(|age| {
            let years_left = life_expectancy - age;
            let growth = (1.0 + annual_return).powi((age - min_age) as i32);
            RetirementAgeScore {
                age,
                years_left,
                growth,
                utility: growth * years_left as f64,
            }
        })
        .collect()
}

/// Highest-utility age; ties go to the later age
pub fn optimal_retirement_age(scores: &[RetirementAgeScore]) -> Option<RetirementAgeScore> {
    scores
        .iter()
        .copied()
        .reduce(|best, next| if best.utility > next.utility { best } else { next })
}
