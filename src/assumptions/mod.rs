//! Calculation inputs: parameters, risk-profile returns and scenario files

mod params;
mod profile;
pub mod loader;

pub use params::{clamp_horizon, CalculationParameters, MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};
pub use profile::{PayoutOption, RiskProfile};
pub use loader::{load_scenarios, NamedScenario};
