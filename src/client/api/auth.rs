//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{
    LoginOutcome, LoginRequest, RegisterRequest, SessionGrant, TwoFactorSetup, User,
    VerifyTwoFactorRequest,
};
use crate::error::Result;

/// Operations against the auth service
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account; does not log in
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// Exchange credentials for a session or a two-factor ticket
    async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome>;

    /// Exchange a two-factor ticket and code for a session
    async fn verify_2fa(&self, request: &VerifyTwoFactorRequest) -> Result<SessionGrant>;

    /// Enroll the current user in TOTP two-factor authentication
    async fn enable_2fa(&self, session_token: &str) -> Result<TwoFactorSetup>;

    /// Profile of the session's user
    async fn me(&self, session_token: &str) -> Result<User>;

    /// Invalidate the session server-side
    async fn logout(&self, session_token: &str) -> Result<()>;
}
