//! Dashboard and logout commands

use std::io::IsTerminal;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{DailyStat, Subscription, Summary, User};
use crate::error::Result;
use crate::flow::dashboard::{self, Dashboard, MSG_LOGGED_OUT};
use crate::models::DailyStatDisplay;
use crate::output::formatters::{format_btc, format_hashrate, format_stat_date, format_usd};
use crate::output::table::format_table;

const EMPTY_STATS: &str = "No mining activity yet. Add a mining account to start earning.";

/// Run the dashboard command
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let spinner = loading_spinner(ctx.format);
    let outcome = dashboard::load_dashboard(&ctx.client, &ctx.store).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let Some(dashboard) = ctx.ready(outcome?) else {
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Pretty => print_pretty(&dashboard),
        OutputFormat::Table => print_table(&dashboard),
        OutputFormat::Json => ctx.print_json(&DashboardJson::from(&dashboard))?,
    }

    Ok(())
}

/// Run the logout command
pub async fn logout(ctx: &CommandContext) -> Result<()> {
    dashboard::logout(&ctx.client, &ctx.store).await?;
    println!("{} {}", "✓".green(), MSG_LOGGED_OUT);
    Ok(())
}

fn loading_spinner(format: OutputFormat) -> Option<ProgressBar> {
    if format == OutputFormat::Json || !std::io::stderr().is_terminal() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading dashboard...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn print_pretty(dashboard: &Dashboard) {
    let Dashboard { user, snapshot } = dashboard;

    println!("{}", user.full_name.bold());
    println!("{}\n", user.email.dimmed());

    let cards = [
        ("Accounts", format!("{}", snapshot.summary.total_accounts)),
        ("Hashrate", format_hashrate(snapshot.summary.total_hashrate)),
        ("Profit (7d)", format_usd(snapshot.total_profit())),
        ("BTC (7d)", format_btc(snapshot.total_btc())),
    ];
    for (label, value) in cards {
        println!("  {:<12} {}", label.dimmed(), value.bold());
    }
    println!();

    if let Some(sub) = &snapshot.subscription {
        print_subscription(sub);
        println!();
    }

    println!("{}", "Recent activity".bold());
    if snapshot.recent_stats.is_empty() {
        println!("  {}", EMPTY_STATS.dimmed());
        return;
    }

    for stat in &snapshot.recent_stats {
        let profit = format_usd(stat.daily_profit);
        let profit = if stat.daily_profit < 0.0 {
            profit.red()
        } else {
            profit.green()
        };
        println!(
            "  {}  {} BTC  {}",
            format_stat_date(&stat.date),
            format_btc(stat.daily_btc),
            profit
        );
    }
}

fn print_subscription(sub: &Subscription) {
    println!("{} {}", "Subscription:".bold(), sub.plan_name.cyan());
    println!(
        "  {} allocated, {}/month",
        format_hashrate(sub.hashrate_allocation),
        format_usd(sub.price_usd)
    );
    if let Some(status) = &sub.status {
        println!("  Status: {}", status);
    }
    if let Some(expires_at) = &sub.expires_at {
        println!("  Expires: {}", format_stat_date(expires_at));
    }
}

fn print_table(dashboard: &Dashboard) {
    let rows: Vec<DailyStatDisplay> = dashboard
        .snapshot
        .recent_stats
        .iter()
        .map(DailyStatDisplay::from)
        .collect();
    println!("{}", format_table(&rows, EMPTY_STATS));
}

/// JSON view of the dashboard, with the 7-day totals precomputed
#[derive(Debug, Serialize)]
struct DashboardJson<'a> {
    user: &'a User,
    summary: &'a Summary,
    subscription: Option<&'a Subscription>,
    total_profit: f64,
    total_btc: f64,
    recent_stats: &'a [DailyStat],
}

impl<'a> From<&'a Dashboard> for DashboardJson<'a> {
    fn from(dashboard: &'a Dashboard) -> Self {
        let snapshot = &dashboard.snapshot;
        Self {
            user: &dashboard.user,
            summary: &snapshot.summary,
            subscription: snapshot.subscription.as_ref(),
            total_profit: snapshot.total_profit(),
            total_btc: snapshot.total_btc(),
            recent_stats: &snapshot.recent_stats,
        }
    }
}
