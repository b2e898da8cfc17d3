//! CSV-based scenario loader
//!
//! Loads batches of calculation parameters from a CSV file with a header row:
//! `ScenarioID,LumpSum,AnnualAnnuity,HorizonYears,NominalReturn,Inflation,AnnuityEscalation,StartAge`

use csv::Reader;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::params::{clamp_horizon, CalculationParameters};
use crate::error::{PlannerError, Result};

/// Default location of the bundled scenario file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// A parameter set with the identifier it was loaded under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub id: String,
    pub params: CalculationParameters,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: String,
    #[serde(rename = "LumpSum")]
    lump_sum: f64,
    #[serde(rename = "AnnualAnnuity")]
    annual_annuity: f64,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
    #[serde(rename = "NominalReturn")]
    nominal_return: f64,
    #[serde(rename = "Inflation")]
    inflation: f64,
    #[serde(rename = "AnnuityEscalation")]
    annuity_escalation: Option<f64>,
    #[serde(rename = "StartAge")]
    start_age: u32,
}

impl CsvRow {
    fn into_scenario(self) -> Result<NamedScenario> {
        let params = CalculationParameters {
            lump_sum: self.lump_sum,
            annual_annuity: self.annual_annuity,
            horizon_years: clamp_horizon(self.horizon_years),
            nominal_return_rate: self.nominal_return,
            inflation_rate: self.inflation,
            annuity_escalation_rate: self.annuity_escalation.unwrap_or(0.0),
            start_age: self.start_age,
        };

        params.validate().map_err(|err| match err {
            PlannerError::InvalidParameter { field, reason } => PlannerError::InvalidParameter {
                field,
                reason: format!("scenario {}: {}", self.scenario_id, reason),
            },
            other => other,
        })?;

        Ok(NamedScenario {
            id: self.scenario_id,
            params,
        })
    }
}

/// Load scenarios from any reader producing CSV text
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios(path: &Path) -> Result<Vec<NamedScenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from the default location
pub fn load_default_scenarios() -> Result<Vec<NamedScenario>> {
    load_scenarios(Path::new(DEFAULT_SCENARIOS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ScenarioID,LumpSum,AnnualAnnuity,HorizonYears,NominalReturn,Inflation,AnnuityEscalation,StartAge\n";

    #[test]
    fn test_load_scenarios() {
        let text = format!(
            "{}base,5000000,350000,35,0.08,0.05,0,60\nstepup,5000000,350000,35,0.08,0.05,0.10,60\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(text.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, "base");
        assert_eq!(scenarios[0].params, CalculationParameters::default());
        assert_eq!(scenarios[1].params.annuity_escalation_rate, 0.10);
    }

    #[test]
    fn test_empty_escalation_defaults_to_zero() {
        let text = format!("{}a,100,10,10,0.05,0.02,,65\n", HEADER);
        let scenarios = load_scenarios_from_reader(text.as_bytes()).unwrap();
        assert_eq!(scenarios[0].params.annuity_escalation_rate, 0.0);
    }

    #[test]
    fn test_horizon_is_clamped() {
        let text = format!("{}a,100,10,0,0.05,0.02,0,65\nb,100,10,90,0.05,0.02,0,65\n", HEADER);
        let scenarios = load_scenarios_from_reader(text.as_bytes()).unwrap();
        assert_eq!(scenarios[0].params.horizon_years, 1);
        assert_eq!(scenarios[1].params.horizon_years, 60);
    }

    #[test]
    fn test_invalid_row_names_scenario() {
        let text = format!("{}broken,-5,10,10,0.05,0.02,0,65\n", HEADER);
        let err = load_scenarios_from_reader(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("scenario broken"));
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let text = format!("{}a,lots,10,10,0.05,0.02,0,65\n", HEADER);
        let err = load_scenarios_from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }

    #[test]
    fn test_load_default_scenarios() {
        let result = load_default_scenarios();
        assert!(result.is_ok(), "Failed to load scenarios: {:?}", result.err());
        assert!(!result.unwrap().is_empty());
    }
}
