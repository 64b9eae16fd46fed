//! Mining account models

use serde::{Deserialize, Serialize};

use super::number::{lenient_f64, lenient_id};

/// A mining account owned by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningAccount {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,

    pub account_name: String,

    /// TH/s
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hashrate: f64,

    /// Watts
    #[serde(default, deserialize_with = "lenient_f64")]
    pub power_consumption: f64,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating a mining account
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest {
    pub account_name: String,
    pub hashrate: f64,
    pub power_consumption: f64,
}

/// One day of output for a single account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStat {
    pub date: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_hashrate: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub power_used: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub btc_mined: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub electricity_cost: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub profit_usd: f64,
}
