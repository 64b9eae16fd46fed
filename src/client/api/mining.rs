//! Mining-stats API trait

use async_trait::async_trait;

use crate::client::models::{AccountStat, CreateAccountRequest, DashboardSnapshot, MiningAccount};
use crate::error::Result;

/// Operations against the mining-stats service. Every call is authenticated.
#[async_trait]
pub trait MiningApi: Send + Sync {
    /// Aggregated summary, subscription and the last seven days
    async fn dashboard(&self, session_token: &str) -> Result<DashboardSnapshot>;

    /// All mining accounts, newest first
    async fn list_accounts(&self, session_token: &str) -> Result<Vec<MiningAccount>>;

    /// Register a new mining account
    async fn create_account(
        &self,
        session_token: &str,
        request: &CreateAccountRequest,
    ) -> Result<MiningAccount>;

    /// Last 30 days for one account
    async fn account_stats(&self, session_token: &str, account_id: &str)
    -> Result<Vec<AccountStat>>;
}
