//! CSV, JSON and console rendering of projections

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::projection::{BreakEvenProjection, ProjectionPoint};
use crate::scenario::ScenarioOutcome;

#[derive(Serialize)]
struct PointRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "RealLumpSum")]
    real_lump_sum: f64,
    #[serde(rename = "RealAnnuity")]
    real_annuity: f64,
    #[serde(rename = "Difference")]
    difference: f64,
}

impl From<&ProjectionPoint> for PointRow {
    fn from(p: &ProjectionPoint) -> Self {
        Self {
            year: p.year,
            age: p.age,
            real_lump_sum: p.real_lump_sum_value,
            real_annuity: p.real_annuity_value,
            difference: p.difference,
        }
    }
}

#[derive(Serialize)]
struct OutcomeRow<'a> {
    #[serde(rename = "ScenarioID")]
    id: &'a str,
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
    annuity_escalation: f64,
    #[serde(rename = "StartAge")]
    start_age: u32,
    #[serde(rename = "RealReturn")]
    real_return: f64,
    #[serde(rename = "FinalRealLumpSum")]
    final_real_lump_sum: f64,
    #[serde(rename = "FinalRealAnnuity")]
    final_real_annuity: f64,
    #[serde(rename = "BreakEvenYear")]
    break_even_year: Option<f64>,
    #[serde(rename = "BreakEvenAge")]
    break_even_age: Option<f64>,
}

impl<'a> From<&'a ScenarioOutcome> for OutcomeRow<'a> {
    fn from(o: &'a ScenarioOutcome) -> Self {
        Self {
            id: &o.id,
            lump_sum: o.params.lump_sum,
            annual_annuity: o.params.annual_annuity,
            horizon_years: o.params.horizon_years,
            nominal_return: o.params.nominal_return_rate,
            inflation: o.params.inflation_rate,
            annuity_escalation: o.params.annuity_escalation_rate,
            start_age: o.params.start_age,
            real_return: o.summary.real_return,
            final_real_lump_sum: o.summary.final_real_lump_sum,
            final_real_annuity: o.summary.final_real_annuity,
            break_even_year: o.summary.break_even_year,
            break_even_age: o.summary.break_even_age,
        }
    }
}

/// Write one row per projected year
pub fn write_points_csv<W: Write>(writer: W, points: &[ProjectionPoint]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in points {
        csv.serialize(PointRow::from(point))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one summary row per scenario
pub fn write_outcomes_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv.serialize(OutcomeRow::from(outcome))?;
    }
    csv.flush()?;
    Ok(())
}

/// Full projection as pretty-printed JSON
pub fn projection_json(projection: &BreakEvenProjection) -> Result<String> {
    Ok(serde_json::to_string_pretty(projection)?)
}

/// Fixed-width table of the projection for the console
pub fn format_table(projection: &BreakEvenProjection) -> String {
    let mut out = format!(
        "{:>4} {:>4} {:>16} {:>16} {:>16}\n{}\n",
        "Year",
        "Age",
        "Real LumpSum",
        "Real Annuity",
        "Difference",
        "-".repeat(60)
    );

    for p in &projection.points {
        out.push_str(&format!(
            "{:>4} {:>4} {:>16.0} {:>16.0} {:>16.0}\n",
            p.year, p.age, p.real_lump_sum_value, p.real_annuity_value, p.difference
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CalculationParameters;
    use crate::projection::compute;
    use crate::scenario::ScenarioRunner;
    use crate::assumptions::NamedScenario;

    #[test]
    fn test_points_csv() {
        let params = CalculationParameters::new(1_000_000.0, 100_000.0, 3, 0.0, 0.0, 60);
        let projection = compute(&params);

        let mut buf = Vec::new();
        write_points_csv(&mut buf, &projection.points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Year,Age,RealLumpSum,RealAnnuity,Difference");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "0,60,1000000.0,0.0,-1000000.0");
        assert_eq!(lines[3], "2,62,1000000.0,200000.0,-800000.0");
    }

    #[test]
    fn test_outcomes_csv_leaves_missing_break_even_empty() {
        let runner = ScenarioRunner::new();
        let outcomes = runner.run_batch(&[NamedScenario {
            id: "base".to_string(),
            params: CalculationParameters::default(),
        }]);

        let mut buf = Vec::new();
        write_outcomes_csv(&mut buf, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row = text.lines().nth(1).unwrap();

        assert!(row.starts_with("base,5000000.0,350000.0,35,"));
        assert!(row.ends_with(",,"));
    }

    #[test]
    fn test_json_contains_break_even() {
        let params = CalculationParameters::new(1_000_000.0, 100_000.0, 20, 0.0, 0.0, 60);
        let json = projection_json(&compute(&params)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["break_even"]["year"], 10.0);
        assert_eq!(value["points"].as_array().unwrap().len(), 21);
    }

    #[test]
    fn test_table_has_row_per_year() {
        let projection = compute(&CalculationParameters::default());
        let table = format_table(&projection);
        assert_eq!(table.lines().count(), 2 + 36);
        assert!(table.starts_with("Year  Age"));
        assert!(table.ends_with('\n'));
    }
}
