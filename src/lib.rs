//! Retirement Break-even - lump sum vs annuity comparison in real terms
//!
//! This library provides:
//! - Inflation-adjusted projections of a lump sum and an annuity, each invested at the real return
//! - Break-even detection with linear interpolation between projected years
//! - Tax-aware monthly payout comparison across payout options
//! - Batch scenario runs from CSV

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod payout;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::PlannerError;
pub use assumptions::{CalculationParameters, RiskProfile};
pub use projection::{
    compute, BreakEvenCalculator, BreakEvenProjection, BreakEvenResult, BreakEvenStatus,
    ProjectionPoint,
};
pub use scenario::ScenarioRunner;
