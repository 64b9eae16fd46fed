//! Mining account commands

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::flow::account;
use crate::models::{AccountDisplay, AccountStatDisplay};
use crate::output::formatters::{format_hashrate, format_usd, to_fixed};
use crate::output::table::format_table;

const NO_ACCOUNTS: &str = "No mining accounts. Create one with 'cryptomine account create <NAME>'.";
const NO_STATS: &str = "No stats for this account yet.";

/// Run `account list`
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let outcome = account::list(&ctx.client, &ctx.store).await?;
    let Some(accounts) = ctx.ready(outcome) else {
        return Ok(());
    };

    if ctx.format == OutputFormat::Json {
        return ctx.print_json(&accounts);
    }

    let rows: Vec<AccountDisplay> = accounts.iter().map(AccountDisplay::from).collect();
    println!("{}", format_table(&rows, NO_ACCOUNTS));
    Ok(())
}

/// Run `account create`
pub async fn create(ctx: &CommandContext, name: &str, hashrate: f64, power: f64) -> Result<()> {
    let outcome = account::create(&ctx.client, &ctx.store, name, hashrate, power).await?;
    let Some(created) = ctx.ready(outcome) else {
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => ctx.print_json(&created)?,
        OutputFormat::Table => {
            println!("{}", format_table(&[AccountDisplay::from(&created)], ""));
        }
        OutputFormat::Pretty => println!(
            "{} Created {} ({}, {} W) with ID {}",
            "✓".green(),
            created.account_name.bold(),
            format_hashrate(created.hashrate),
            to_fixed(created.power_consumption, 0),
            created.id
        ),
    }

    Ok(())
}

/// Run `account stats`
pub async fn stats(ctx: &CommandContext, id: &str) -> Result<()> {
    let outcome = account::stats(&ctx.client, &ctx.store, id).await?;
    let Some(stats) = ctx.ready(outcome) else {
        return Ok(());
    };

    if ctx.format == OutputFormat::Json {
        return ctx.print_json(&stats);
    }

    let rows: Vec<AccountStatDisplay> = stats.iter().map(AccountStatDisplay::from).collect();
    println!("{}", format_table(&rows, NO_STATS));

    if ctx.format == OutputFormat::Pretty && !stats.is_empty() {
        let profit: f64 = stats.iter().map(|s| s.profit_usd).sum();
        println!("\n{} {}", "Total profit:".bold(), format_usd(profit));
    }

    Ok(())
}
