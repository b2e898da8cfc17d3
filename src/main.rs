//! Retirement Break-even CLI
//!
//! Runs a single lump sum vs annuity comparison. Rates are given in percent,
//! the way the dashboard sliders present them.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

use retirement_breakeven::{report, BreakEvenCalculator, CalculationParameters, RiskProfile};

#[derive(Parser, Debug)]
#[command(version, about = "Inflation-adjusted lump sum vs annuity break-even")]
struct Args {
    /// One-time payout available at retirement
    #[arg(long, default_value_t = 5_000_000.0)]
    lump_sum: f64,

    /// First-year annuity payment
    #[arg(long, default_value_t = 350_000.0)]
    annuity: f64,

    /// Annual annuity step-up, percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    escalation_pct: f64,

    /// Nominal investment return, percent
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    return_pct: f64,

    /// Inflation, percent
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    inflation_pct: f64,

    /// Years to project (clamped to 1..=60)
    #[arg(long, default_value_t = 35)]
    horizon: u32,

    /// Age at the payout decision
    #[arg(long, default_value_t = 60)]
    start_age: u32,

    /// Take the nominal return from a risk profile instead of --return-pct
    #[arg(long)]
    profile: Option<RiskProfile>,

    /// Write the year-by-year projection to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn params(&self) -> CalculationParameters {
        let mut params = CalculationParameters::from_percentages(
            self.lump_sum,
            self.annuity,
            self.horizon,
            self.return_pct,
            self.inflation_pct,
            self.escalation_pct,
            self.start_age,
        );
        if let Some(profile) = self.profile {
            params.nominal_return_rate = profile.lump_sum_return();
        }
        params
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = args.params();
    params.validate().context("invalid calculation parameters")?;

    let projection = BreakEvenCalculator::new().compute(&params);

    if args.json {
        println!("{}", report::projection_json(&projection)?);
    } else {
        println!("Lump Sum vs Annuity (real, today's money)");
        println!("=========================================\n");
        println!("  Lump sum:        {:.0}", params.lump_sum);
        println!("  Annuity (yr 1):  {:.0}", params.annual_annuity);
        println!("  Step-up:         {:.2}%", params.annuity_escalation_rate * 100.0);
        println!("  Nominal return:  {:.2}%", params.nominal_return_rate * 100.0);
        println!("  Inflation:       {:.2}%", params.inflation_rate * 100.0);
        println!(
            "  Real return r = (1 + nominal) / (1 + inflation) - 1 => {:.2}%\n",
            projection.real_return * 100.0
        );

        print!("{}", report::format_table(&projection));

        let summary = projection.summary();
        println!("\n{}", projection.status());
        println!("  Final real lump sum: {:.0}", summary.final_real_lump_sum);
        println!("  Final real annuity:  {:.0}", summary.final_real_annuity);
        println!("  Annuity receipts:    {:.0} nominal, {:.0} real",
            summary.total_nominal_receipts, summary.total_real_receipts);
    }

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_points_csv(file, &projection.points)?;
        log::info!("projection written to {}", path.display());
    }

    Ok(())
}
