//! Mining account management

use super::{SessionOutcome, with_session};
use crate::client::MiningApi;
use crate::client::models::{AccountStat, CreateAccountRequest, MiningAccount};
use crate::error::{Error, Result};
use crate::session::TokenStore;

pub const MSG_ACCOUNT_NAME_REQUIRED: &str = "Account name is required";

pub async fn list<A, S>(api: &A, store: &S) -> Result<SessionOutcome<Vec<MiningAccount>>>
where
    A: MiningApi + ?Sized,
    S: TokenStore + ?Sized,
{
    with_session(store, |token| async move { api.list_accounts(&token).await }).await
}

/// Create an account. An empty name is rejected before the session is even
/// looked at; anything else, whitespace included, goes to the server as typed.
pub async fn create<A, S>(
    api: &A,
    store: &S,
    name: &str,
    hashrate: f64,
    power_consumption: f64,
) -> Result<SessionOutcome<MiningAccount>>
where
    A: MiningApi + ?Sized,
    S: TokenStore + ?Sized,
{
    if name.is_empty() {
        return Err(Error::Validation(MSG_ACCOUNT_NAME_REQUIRED.to_string()));
    }

    let request = CreateAccountRequest {
        account_name: name.to_string(),
        hashrate,
        power_consumption,
    };

    with_session(store, |token| async move {
        api.create_account(&token, &request).await
    })
    .await
}

/// Last 30 days of stats for one account
pub async fn stats<A, S>(
    api: &A,
    store: &S,
    account_id: &str,
) -> Result<SessionOutcome<Vec<AccountStat>>>
where
    A: MiningApi + ?Sized,
    S: TokenStore + ?Sized,
{
    with_session(store, |token| async move {
        api.account_stats(&token, account_id).await
    })
    .await
}
