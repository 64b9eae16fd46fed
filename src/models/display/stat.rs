//! Mining stat display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{AccountStat, DailyStat};
use crate::output::formatters::{
    format_btc, format_hashrate, format_stat_date, format_usd, to_fixed,
};

/// One dashboard day for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DailyStatDisplay {
    /// Day, `DD.MM.YYYY`
    #[tabled(rename = "DATE")]
    pub date: String,

    /// BTC mined, 8 decimals
    #[tabled(rename = "BTC")]
    pub btc: String,

    /// Profit in USD, 2 decimals
    #[tabled(rename = "PROFIT")]
    pub profit: String,
}

impl From<&DailyStat> for DailyStatDisplay {
    fn from(stat: &DailyStat) -> Self {
        Self {
            date: format_stat_date(&stat.date),
            btc: format_btc(stat.daily_btc),
            profit: format_usd(stat.daily_profit),
        }
    }
}

/// Per-account daily stat for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AccountStatDisplay {
    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "HASHRATE")]
    pub hashrate: String,

    /// Energy used that day
    #[tabled(rename = "POWER")]
    pub power: String,

    #[tabled(rename = "BTC")]
    pub btc: String,

    #[tabled(rename = "REVENUE")]
    pub revenue: String,

    #[tabled(rename = "ELECTRICITY")]
    pub electricity: String,

    #[tabled(rename = "PROFIT")]
    pub profit: String,
}

impl From<&AccountStat> for AccountStatDisplay {
    fn from(stat: &AccountStat) -> Self {
        Self {
            date: format_stat_date(&stat.date),
            hashrate: format_hashrate(stat.total_hashrate),
            power: format!("{} W", to_fixed(stat.power_used, 1)),
            btc: format_btc(stat.btc_mined),
            revenue: format_usd(stat.revenue_usd),
            electricity: format_usd(stat.electricity_cost),
            profit: format_usd(stat.profit_usd),
        }
    }
}
