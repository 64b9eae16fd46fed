//! Dashboard snapshot models

use serde::{Deserialize, Serialize};

use super::number::{lenient_count, lenient_f64};

/// Everything `action=dashboard` returns for the current user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Totals across active mining accounts
    #[serde(default)]
    pub summary: Summary,

    /// Most recent active subscription, if any
    #[serde(default)]
    pub subscription: Option<Subscription>,

    /// Per-day aggregates, newest first
    #[serde(default)]
    pub recent_stats: Vec<DailyStat>,
}

/// Aggregate summary of the user's mining accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of active mining accounts
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_accounts: u64,

    /// Combined hashrate in TH/s
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_hashrate: f64,

    /// Combined power draw in watts
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_power: f64,
}

/// Active subscription plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub plan_name: String,

    /// Allocated hashrate in TH/s
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hashrate_allocation: f64,

    /// Monthly price in USD
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_usd: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// One day of aggregated mining output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub daily_btc: f64,

    /// Profit in USD
    #[serde(default, deserialize_with = "lenient_f64")]
    pub daily_profit: f64,
}

impl DashboardSnapshot {
    /// Sum of `daily_profit` over the returned days
    pub fn total_profit(&self) -> f64 {
        self.recent_stats.iter().map(|s| s.daily_profit).sum()
    }

    /// Sum of `daily_btc` over the returned days
    pub fn total_btc(&self) -> f64 {
        self.recent_stats.iter().map(|s| s.daily_btc).sum()
    }
}
