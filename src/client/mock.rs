//! Mock CryptoMine API client for testing
//!
//! Provides a scripted implementation of the API traits so the auth flow and
//! dashboard loader can be tested without a server.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, MiningApi};
use super::models::{
    AccountStat, CreateAccountRequest, DashboardSnapshot, LoginOutcome, LoginRequest,
    MiningAccount, RegisterRequest, SessionGrant, TwoFactorSetup, User, VerifyTwoFactorRequest,
};
use crate::error::{ApiError, Result};

/// Queue of scripted results; when empty the mock falls back to a default
type Script<T> = Arc<Mutex<VecDeque<std::result::Result<T, ApiError>>>>;

/// Mock API client for testing.
///
/// Script responses per operation with the `with_*` builders; each scripted
/// result is consumed by one call.
///
/// # Example
/// ```ignore
/// let mock = MockCryptoMineClient::new()
///     .with_login(Ok(LoginOutcome::TwoFactorRequired { temp_token: "t".into() }))
///     .await;
/// ```
#[derive(Default)]
pub struct MockCryptoMineClient {
    register: Script<()>,
    login: Script<LoginOutcome>,
    verify: Script<SessionGrant>,
    enable_2fa: Script<TwoFactorSetup>,
    me: Script<User>,
    logout: Script<()>,
    dashboard: Script<DashboardSnapshot>,
    accounts: Script<Vec<MiningAccount>>,
    create_account: Script<MiningAccount>,
    stats: Script<Vec<AccountStat>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured: Arc<Mutex<Captured>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub verify_2fa: usize,
    pub enable_2fa: usize,
    pub me: usize,
    pub logout: usize,
    pub dashboard: usize,
    pub list_accounts: usize,
    pub create_account: usize,
    pub account_stats: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.register
            + self.login
            + self.verify_2fa
            + self.enable_2fa
            + self.me
            + self.logout
            + self.dashboard
            + self.list_accounts
            + self.create_account
            + self.account_stats
    }
}

/// Request data captured for assertions
#[derive(Default, Debug, Clone)]
pub struct Captured {
    /// `temp_token` values sent to verify-2fa
    pub verify_temp_tokens: Vec<String>,
    /// Session tokens seen on authenticated calls, in call order
    pub session_tokens: Vec<String>,
}

/// Profile returned when `me` is not scripted
pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        email: "miner@example.com".to_string(),
        full_name: "Test Miner".to_string(),
        two_factor_enabled: Some(false),
        created_at: None,
    }
}

/// Session grant with the given token and the sample user
pub fn grant(token: &str) -> SessionGrant {
    SessionGrant {
        session_token: token.to_string(),
        user: Some(sample_user()),
    }
}

async fn next<T>(script: &Script<T>, default: impl FnOnce() -> T) -> Result<T> {
    match script.lock().await.pop_front() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(e.into()),
        None => Ok(default()),
    }
}

impl MockCryptoMineClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_register(self, result: std::result::Result<(), ApiError>) -> Self {
        self.register.lock().await.push_back(result);
        self
    }

    pub async fn with_login(self, result: std::result::Result<LoginOutcome, ApiError>) -> Self {
        self.login.lock().await.push_back(result);
        self
    }

    pub async fn with_verify(self, result: std::result::Result<SessionGrant, ApiError>) -> Self {
        self.verify.lock().await.push_back(result);
        self
    }

    pub async fn with_enable_2fa(
        self,
        result: std::result::Result<TwoFactorSetup, ApiError>,
    ) -> Self {
        self.enable_2fa.lock().await.push_back(result);
        self
    }

    pub async fn with_me(self, result: std::result::Result<User, ApiError>) -> Self {
        self.me.lock().await.push_back(result);
        self
    }

    pub async fn with_logout(self, result: std::result::Result<(), ApiError>) -> Self {
        self.logout.lock().await.push_back(result);
        self
    }

    pub async fn with_dashboard(
        self,
        result: std::result::Result<DashboardSnapshot, ApiError>,
    ) -> Self {
        self.dashboard.lock().await.push_back(result);
        self
    }

    pub async fn with_accounts(
        self,
        result: std::result::Result<Vec<MiningAccount>, ApiError>,
    ) -> Self {
        self.accounts.lock().await.push_back(result);
        self
    }

    pub async fn with_create_account(
        self,
        result: std::result::Result<MiningAccount, ApiError>,
    ) -> Self {
        self.create_account.lock().await.push_back(result);
        self
    }

    pub async fn with_stats(self, result: std::result::Result<Vec<AccountStat>, ApiError>) -> Self {
        self.stats.lock().await.push_back(result);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get captured request data for test assertions.
    pub async fn captured(&self) -> Captured {
        self.captured.lock().await.clone()
    }

    async fn record_token(&self, token: &str) {
        self.captured
            .lock()
            .await
            .session_tokens
            .push(token.to_string());
    }
}

#[async_trait]
impl AuthApi for MockCryptoMineClient {
    async fn register(&self, _request: &RegisterRequest) -> Result<()> {
        self.call_count.lock().await.register += 1;
        next(&self.register, || ()).await
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginOutcome> {
        self.call_count.lock().await.login += 1;
        next(&self.login, || LoginOutcome::Authenticated(grant("mock-session"))).await
    }

    async fn verify_2fa(&self, request: &VerifyTwoFactorRequest) -> Result<SessionGrant> {
        self.call_count.lock().await.verify_2fa += 1;
        self.captured
            .lock()
            .await
            .verify_temp_tokens
            .push(request.temp_token.clone());
        next(&self.verify, || grant("mock-session")).await
    }

    async fn enable_2fa(&self, session_token: &str) -> Result<TwoFactorSetup> {
        self.call_count.lock().await.enable_2fa += 1;
        self.record_token(session_token).await;
        next(&self.enable_2fa, || TwoFactorSetup {
            secret: "JBSWY3DPEHPK3PXP".to_string(),
            qr_uri: "otpauth://totp/CryptoMine:miner%40example.com?secret=JBSWY3DPEHPK3PXP"
                .to_string(),
        })
        .await
    }

    async fn me(&self, session_token: &str) -> Result<User> {
        self.call_count.lock().await.me += 1;
        self.record_token(session_token).await;
        next(&self.me, sample_user).await
    }

    async fn logout(&self, session_token: &str) -> Result<()> {
        self.call_count.lock().await.logout += 1;
        self.record_token(session_token).await;
        next(&self.logout, || ()).await
    }
}

#[async_trait]
impl MiningApi for MockCryptoMineClient {
    async fn dashboard(&self, session_token: &str) -> Result<DashboardSnapshot> {
        self.call_count.lock().await.dashboard += 1;
        self.record_token(session_token).await;
        next(&self.dashboard, DashboardSnapshot::default).await
    }

    async fn list_accounts(&self, session_token: &str) -> Result<Vec<MiningAccount>> {
        self.call_count.lock().await.list_accounts += 1;
        self.record_token(session_token).await;
        next(&self.accounts, Vec::new).await
    }

    async fn create_account(
        &self,
        session_token: &str,
        request: &CreateAccountRequest,
    ) -> Result<MiningAccount> {
        self.call_count.lock().await.create_account += 1;
        self.record_token(session_token).await;
        let request = request.clone();
        next(&self.create_account, move || MiningAccount {
            id: "1".to_string(),
            account_name: request.account_name,
            hashrate: request.hashrate,
            power_consumption: request.power_consumption,
            is_active: true,
            created_at: None,
        })
        .await
    }

    async fn account_stats(
        &self,
        session_token: &str,
        _account_id: &str,
    ) -> Result<Vec<AccountStat>> {
        self.call_count.lock().await.account_stats += 1;
        self.record_token(session_token).await;
        next(&self.stats, Vec::new).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_defaults() {
        let mock = MockCryptoMineClient::new();

        let user = mock.me("tok").await.unwrap();
        assert_eq!(user.email, "miner@example.com");

        let counts = mock.call_counts().await;
        assert_eq!(counts.me, 1);
        assert_eq!(counts.total(), 1);
    }

    #[tokio::test]
    async fn test_scripted_error_is_consumed() {
        let mock = MockCryptoMineClient::new()
            .with_me(Err(ApiError::Network("down".to_string())))
            .await;

        assert!(matches!(
            mock.me("tok").await,
            Err(Error::Api(ApiError::Network(_)))
        ));
        assert!(mock.me("tok").await.is_ok());
    }

    #[tokio::test]
    async fn test_tokens_are_captured() {
        let mock = MockCryptoMineClient::new();
        mock.dashboard("a").await.unwrap();
        mock.logout("b").await.unwrap();

        assert_eq!(mock.captured().await.session_tokens, vec!["a", "b"]);
    }
}
