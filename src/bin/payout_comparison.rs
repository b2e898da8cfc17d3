//! Compare monthly retirement income across payout options, net of tax

use anyhow::{Context, Result};
use clap::Parser;

use retirement_breakeven::payout::{compare_payouts, PayoutComparisonConfig};

#[derive(Parser, Debug)]
#[command(about = "Monthly income from lump sum drawdown, annuity and phased withdrawal")]
struct Args {
    /// Retirement corpus
    #[arg(long, default_value_t = 10_000_000.0)]
    corpus: f64,

    /// Drawdown term for the lump sum, years
    #[arg(long, default_value_t = 25)]
    years: u32,

    /// Return on the undrawn lump sum, percent
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    return_pct: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = PayoutComparisonConfig {
        corpus: args.corpus,
        years: args.years,
        annual_return: args.return_pct / 100.0,
    };
    config.validate().context("invalid payout comparison")?;
    log::debug!("payout comparison config: {:?}", config);

    println!("Payout comparison for a corpus of {:.0}", config.corpus);
    println!("{:<20} {:>14} {:>14} {:>14}", "Option", "Monthly gross", "Monthly net", "Annual tax");
    println!("{}", "-".repeat(65));

    for row in compare_payouts(&config) {
        println!(
            "{:<20} {:>14.0} {:>14.0} {:>14.0}",
            row.label(),
            row.monthly_gross,
            row.monthly_net,
            row.annual_tax
        );
    }

    Ok(())
}
