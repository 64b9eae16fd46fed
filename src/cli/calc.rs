//! Profit calculator command

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::flow::calculator::{self, Estimate};
use crate::output::json::format_json;
use crate::output::table::format_table;

#[derive(Debug, Tabled)]
struct PeriodRow {
    #[tabled(rename = "PERIOD")]
    period: &'static str,
    #[tabled(rename = "PROFIT (USD)")]
    profit: String,
}

#[derive(Debug, Serialize)]
struct CalcJson<'a> {
    hashrate: &'a str,
    power: &'a str,
    electricity: &'a str,
    #[serde(flatten)]
    estimate: &'a Estimate,
}

/// Run the calc command. Works without a session or network.
pub fn run(format: OutputFormat, hashrate: &str, power: &str, electricity: &str) -> Result<()> {
    let estimate = calculator::estimate(hashrate, power, electricity);

    match format {
        OutputFormat::Pretty => {
            println!(
                "{}",
                format!(
                    "Estimate for {} TH/s at {} W, ${}/kWh",
                    hashrate, power, electricity
                )
                .bold()
            );
            for (label, value) in periods(&estimate) {
                println!("  {:<8} {} USD", label.dimmed(), value);
            }
        }
        OutputFormat::Table => {
            let rows: Vec<PeriodRow> = periods(&estimate)
                .into_iter()
                .map(|(period, profit)| PeriodRow {
                    period,
                    profit: profit.to_string(),
                })
                .collect();
            println!("{}", format_table(&rows, ""));
        }
        OutputFormat::Json => {
            let view = CalcJson {
                hashrate,
                power,
                electricity,
                estimate: &estimate,
            };
            println!("{}", format_json(&view)?);
        }
    }

    Ok(())
}

fn periods(estimate: &Estimate) -> [(&'static str, &str); 3] {
    [
        ("Daily", estimate.daily.as_str()),
        ("Monthly", estimate.monthly.as_str()),
        ("Yearly", estimate.yearly.as_str()),
    ]
}
