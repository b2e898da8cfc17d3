//! Run a batch of break-even scenarios from a CSV file
//!
//! Usage: cargo run --bin run_scenarios -- data/scenarios.csv --output scenario_output.csv

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use retirement_breakeven::assumptions::{load_scenarios, loader::DEFAULT_SCENARIOS_PATH};
use retirement_breakeven::{report, BreakEvenResult, BreakEvenStatus, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(about = "Run lump sum vs annuity scenarios from a CSV file")]
struct Args {
    /// Scenario file
    #[arg(default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    /// Summary output file
    #[arg(long, default_value = "scenario_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_batch(&scenarios);

    println!("\n{:<20} {:>9} {:>16} {:>16}  {}", "Scenario", "Real r", "Real LumpSum", "Real Annuity", "Status");
    println!("{}", "-".repeat(100));
    for outcome in &outcomes {
        let break_even = outcome
            .summary
            .break_even_year
            .zip(outcome.summary.break_even_age)
            .map(|(year, age)| BreakEvenResult { year, age });

        println!(
            "{:<20} {:>8.2}% {:>16.0} {:>16.0}  {}",
            outcome.id,
            outcome.summary.real_return * 100.0,
            outcome.summary.final_real_lump_sum,
            outcome.summary.final_real_annuity,
            BreakEvenStatus::from(break_even),
        );
    }

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    report::write_outcomes_csv(file, &outcomes)?;

    println!("\nOutput written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
