//! CryptoMine HTTP client implementation
//!
//! Both services are single endpoints dispatched by an `action` query
//! parameter. Errors come back as `{"error": "..."}` with a non-2xx status.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, MiningApi};
use super::models::{
    AccountStat, CreateAccountRequest, DashboardSnapshot, LoginOutcome, LoginRequest,
    LoginResponse, MiningAccount, RegisterRequest, SessionGrant, TwoFactorSetup, User,
    UserEnvelope, VerifyTwoFactorRequest,
};
use crate::error::{ApiError, Result};

/// Header carrying the session token on authenticated calls
pub const SESSION_HEADER: &str = "X-Session-Token";

/// Error body shared by both services
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// CryptoMine API client
pub struct CryptoMineClient {
    http: HttpClient,
    auth_url: String,
    mining_url: String,
}

impl CryptoMineClient {
    /// Create a client for the given auth and mining endpoints.
    ///
    /// No request timeout is configured: every call is a single attempt that
    /// waits for the server.
    pub fn new(auth_url: impl Into<String>, mining_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("cryptomine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            auth_url: auth_url.into(),
            mining_url: mining_url.into(),
        })
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn mining_url(&self) -> &str {
        &self.mining_url
    }

    fn auth(&self, method: Method, action: &str) -> RequestBuilder {
        self.http
            .request(method, &self.auth_url)
            .query(&[("action", action)])
    }

    fn mining(&self, method: Method, action: &str, session_token: &str) -> RequestBuilder {
        self.http
            .request(method, &self.mining_url)
            .query(&[("action", action)])
            .header(SESSION_HEADER, session_token)
    }

    /// Send a request and decode a 2xx JSON body into `T`
    async fn send<T: DeserializeOwned>(&self, action: &str, request: RequestBuilder) -> Result<T> {
        debug!("Calling action={}", action);

        let response = request.send().await.map_err(|e| {
            debug!("Transport failure on action={}: {}", action, e);
            ApiError::from(e)
        })?;

        let response = check_status(action, response).await?;

        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} response: {}", action, e))
        })?;
        Ok(data)
    }

    /// Send a request whose success body is irrelevant
    async fn send_discarding(&self, action: &str, request: RequestBuilder) -> Result<()> {
        debug!("Calling action={}", action);

        let response = request.send().await.map_err(ApiError::from)?;
        check_status(action, response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ApiError::Rejected`], keeping the server's
/// `error` text when the body has one.
async fn check_status(action: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(|body| body.error)
        .filter(|msg| !msg.is_empty());

    debug!(
        "action={} rejected with {}: {}",
        action,
        status,
        message.as_deref().unwrap_or("<no message>")
    );

    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
    .into())
}

#[async_trait]
impl AuthApi for CryptoMineClient {
    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let req = self.auth(Method::POST, "register").json(request);
        self.send_discarding("register", req).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome> {
        let req = self.auth(Method::POST, "login").json(request);
        let response: LoginResponse = self.send("login", req).await?;
        Ok(LoginOutcome::try_from(response)?)
    }

    async fn verify_2fa(&self, request: &VerifyTwoFactorRequest) -> Result<SessionGrant> {
        let req = self.auth(Method::POST, "verify-2fa").json(request);
        self.send("verify-2fa", req).await
    }

    async fn enable_2fa(&self, session_token: &str) -> Result<TwoFactorSetup> {
        let req = self
            .auth(Method::POST, "enable-2fa")
            .header(SESSION_HEADER, session_token);
        self.send("enable-2fa", req).await
    }

    async fn me(&self, session_token: &str) -> Result<User> {
        let req = self
            .auth(Method::GET, "me")
            .header(SESSION_HEADER, session_token);
        let envelope: UserEnvelope = self.send("me", req).await?;
        Ok(envelope.user)
    }

    async fn logout(&self, session_token: &str) -> Result<()> {
        let req = self
            .auth(Method::POST, "logout")
            .header(SESSION_HEADER, session_token);
        self.send_discarding("logout", req).await
    }
}

#[async_trait]
impl MiningApi for CryptoMineClient {
    async fn dashboard(&self, session_token: &str) -> Result<DashboardSnapshot> {
        let req = self.mining(Method::GET, "dashboard", session_token);
        self.send("dashboard", req).await
    }

    async fn list_accounts(&self, session_token: &str) -> Result<Vec<MiningAccount>> {
        #[derive(Deserialize)]
        struct AccountsResponse {
            #[serde(default)]
            accounts: Vec<MiningAccount>,
        }

        let req = self.mining(Method::GET, "accounts", session_token);
        let response: AccountsResponse = self.send("accounts", req).await?;
        Ok(response.accounts)
    }

    async fn create_account(
        &self,
        session_token: &str,
        request: &CreateAccountRequest,
    ) -> Result<MiningAccount> {
        #[derive(Deserialize)]
        struct AccountResponse {
            account: MiningAccount,
        }

        let req = self
            .mining(Method::POST, "accounts", session_token)
            .json(request);
        let response: AccountResponse = self.send("accounts", req).await?;
        Ok(response.account)
    }

    async fn account_stats(
        &self,
        session_token: &str,
        account_id: &str,
    ) -> Result<Vec<AccountStat>> {
        #[derive(Deserialize)]
        struct StatsResponse {
            #[serde(default)]
            stats: Vec<AccountStat>,
        }

        let action = format!("stats/{}", account_id);
        let req = self.mining(Method::GET, &action, session_token);
        let response: StatsResponse = self.send(&action, req).await?;
        Ok(response.stats)
    }
}
