//! Lump sum vs annuity projections and break-even detection

mod state;
mod engine;
mod points;
mod breakeven;
mod corpus;
mod retirement_age;

pub use state::{nominal_payment, real_payment, ProjectionState};
pub use engine::{compute, real_return_rate, BreakEvenCalculator};
pub use points::{BreakEvenProjection, ProjectionPoint, ProjectionSummary};
pub use breakeven::{find_break_even, BreakEvenResult, BreakEvenStatus};
pub use corpus::{depletion_age, CorpusCase, CorpusPoint, CorpusProjectionConfig};
pub use retirement_age::{optimal_retirement_age, score_retirement_ages, RetirementAgeScore};
