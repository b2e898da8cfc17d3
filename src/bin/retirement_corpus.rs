//! Project a retirement corpus under base, best and worst cases and score
//! candidate retirement ages

use anyhow::{Context, Result};
use clap::Parser;

use retirement_breakeven::projection::{
    depletion_age, optimal_retirement_age, score_retirement_ages, CorpusProjectionConfig,
};

#[derive(Parser, Debug)]
#[command(about = "Retirement corpus projection and retirement age scoring")]
struct Args {
    #[arg(long, default_value_t = 25)]
    current_age: u32,

    #[arg(long, default_value_t = 60)]
    retirement_age: u32,

    #[arg(long, default_value_t = 85)]
    life_expectancy: u32,

    #[arg(long, default_value_t = 200_000.0)]
    initial_savings: f64,

    #[arg(long, default_value_t = 10_000.0)]
    annual_contribution: f64,

    /// Pre-retirement growth, percent
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    growth_pct: f64,

    /// Yearly withdrawal as a share of the corpus at retirement, percent
    #[arg(long, default_value_t = 6.0)]
    withdrawal_pct: f64,

    /// Post-retirement growth, percent
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    post_growth_pct: f64,

    /// Earliest age considered when scoring retirement ages
    #[arg(long, default_value_t = 51)]
    min_age: u32,

    /// Return used when scoring retirement ages, percent
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    scoring_return_pct: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = CorpusProjectionConfig {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        life_expectancy: args.life_expectancy,
        initial_savings: args.initial_savings,
        annual_contribution: args.annual_contribution,
        growth_rate: args.growth_pct / 100.0,
        withdrawal_rate: args.withdrawal_pct / 100.0,
        post_retirement_growth_rate: args.post_growth_pct / 100.0,
    };
    config.validate().context("invalid corpus projection")?;

    for (case, points) in config.project_cases() {
        let peak = points.iter().map(|p| p.corpus).fold(0.0, f64::max);
        let end = points.last().map(|p| p.corpus).unwrap_or(0.0);
        let depleted = match depletion_age(&points) {
            Some(age) => format!("depleted at age {}", age),
            None => "never depleted".to_string(),
        };
        println!(
            "{:<26} peak {:>14.0}  at {} {:>14.0}  {}",
            case.label(),
            peak,
            config.life_expectancy,
            end,
            depleted
        );
    }

    let min_age = args.min_age.max(args.current_age);
    let scores = score_retirement_ages(min_age, args.life_expectancy, args.scoring_return_pct / 100.0);
    match optimal_retirement_age(&scores) {
        Some(best) => println!(
            "\nOptimal retirement age: {} (years to enjoy: {}, utility {:.2})",
            best.age, best.years_left, best.utility
        ),
        None => println!("\nNo retirement ages between {} and {}", min_age, args.life_expectancy),
    }

    Ok(())
}
