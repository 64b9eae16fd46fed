//! Mining account display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::MiningAccount;
use crate::output::formatters::{format_hashrate, format_stat_date, to_fixed};

/// Mining account display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AccountDisplay {
    /// Account ID
    #[tabled(rename = "ID")]
    pub id: String,

    /// Account name
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "HASHRATE")]
    pub hashrate: String,

    /// Power draw in watts
    #[tabled(rename = "POWER")]
    pub power: String,

    /// active / paused
    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&MiningAccount> for AccountDisplay {
    fn from(account: &MiningAccount) -> Self {
        Self {
            id: account.id.clone(),
            name: account.account_name.clone(),
            hashrate: format_hashrate(account.hashrate),
            power: format!("{} W", to_fixed(account.power_consumption, 0)),
            status: if account.is_active { "active" } else { "paused" }.to_string(),
            created: account
                .created_at
                .as_deref()
                .map(format_stat_date)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}
