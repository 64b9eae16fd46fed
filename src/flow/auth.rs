//! Login, registration and two-factor verification
//!
//! [`AuthFlow`] is a small state machine:
//!
//! ```text
//! Credentials --login (2FA required)--> TwoFactor --verify--> Closed(Success)
//! Credentials --login------------------------------------> Closed(Success)
//! any        --close------------------------------------> Closed(Cancelled)
//! ```
//!
//! Each operation makes at most one request. Empty form fields are rejected
//! before anything goes over the wire.

use log::debug;

use crate::client::AuthApi;
use crate::client::models::{
    LoginOutcome, LoginRequest, RegisterRequest, SessionGrant, VerifyTwoFactorRequest,
};
use crate::error::{Error, Result};
use crate::session::TokenStore;

pub const MSG_FILL_ALL_FIELDS: &str = "Fill in all fields";
pub const MSG_REGISTERED: &str = "Registration complete. Now log in.";
pub const MSG_REGISTER_FAILED: &str = "Registration failed";
pub const MSG_ENTER_CREDENTIALS: &str = "Enter email and password";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_TWO_FACTOR_REQUIRED: &str = "Enter the code from your authenticator app";
pub const MSG_ENTER_CODE: &str = "Enter the 2FA code";
pub const MSG_INVALID_CODE: &str = "Invalid code";
pub const MSG_LOGGED_IN: &str = "Logged in successfully";

/// Where the flow currently is
#[derive(Debug, Clone)]
pub enum AuthState {
    /// Waiting for email/password (or registration details)
    Credentials,

    /// Password accepted; waiting for a one-time code
    TwoFactor { temp_token: String },

    /// Terminal
    Closed(Closure),
}

/// How the flow ended
#[derive(Debug, Clone)]
pub enum Closure {
    Success(SessionGrant),
    Cancelled,
}

/// Result of a successful login call
#[derive(Debug, Clone)]
pub enum LoginStep {
    /// Token stored, flow closed
    LoggedIn(SessionGrant),

    /// Flow moved to the two-factor state; nothing stored yet
    TwoFactorRequired,
}

/// Drives one login/registration session against the auth service
pub struct AuthFlow<'a, A: AuthApi + ?Sized, S: TokenStore + ?Sized> {
    api: &'a A,
    store: &'a S,
    state: AuthState,
}

impl<'a, A: AuthApi + ?Sized, S: TokenStore + ?Sized> AuthFlow<'a, A, S> {
    pub fn new(api: &'a A, store: &'a S) -> Self {
        Self {
            api,
            store,
            state: AuthState::Credentials,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, AuthState::Closed(_))
    }

    /// Create an account. On success the flow stays on the credentials step;
    /// registering never logs in.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<&'static str> {
        self.expect_credentials_step()?;

        if email.is_empty() || password.is_empty() || full_name.is_empty() {
            return Err(Error::Validation(MSG_FILL_ALL_FIELDS.to_string()));
        }

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };

        self.api
            .register(&request)
            .await
            .map_err(|e| e.or_fallback(MSG_REGISTER_FAILED))?;

        debug!("Registered {}", email);
        Ok(MSG_REGISTERED)
    }

    /// Submit credentials.
    ///
    /// A plain session is stored immediately and closes the flow. A
    /// two-factor response only moves the flow to [`AuthState::TwoFactor`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginStep> {
        self.expect_credentials_step()?;

        if email.is_empty() || password.is_empty() {
            return Err(Error::Validation(MSG_ENTER_CREDENTIALS.to_string()));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let outcome = self
            .api
            .login(&request)
            .await
            .map_err(|e| e.or_fallback(MSG_INVALID_CREDENTIALS))?;

        match outcome {
            LoginOutcome::TwoFactorRequired { temp_token } => {
                debug!("Second factor required for {}", email);
                self.state = AuthState::TwoFactor { temp_token };
                Ok(LoginStep::TwoFactorRequired)
            }
            LoginOutcome::Authenticated(grant) => {
                self.finish(&grant)?;
                Ok(LoginStep::LoggedIn(grant))
            }
        }
    }

    /// Submit a one-time code for the pending ticket. A rejected code leaves
    /// the flow in the two-factor state so another code can be tried.
    pub async fn verify_2fa(&mut self, code: &str) -> Result<SessionGrant> {
        let temp_token = match &self.state {
            AuthState::TwoFactor { temp_token } => temp_token.clone(),
            _ => {
                return Err(Error::Other(
                    "No login is waiting for a two-factor code".to_string(),
                ));
            }
        };

        if code.is_empty() {
            return Err(Error::Validation(MSG_ENTER_CODE.to_string()));
        }

        let request = VerifyTwoFactorRequest {
            temp_token,
            code: code.to_string(),
        };

        let grant = self
            .api
            .verify_2fa(&request)
            .await
            .map_err(|e| e.or_fallback(MSG_INVALID_CODE))?;

        self.finish(&grant)?;
        Ok(grant)
    }

    /// Abandon the flow, dropping any pending two-factor ticket
    pub fn close(&mut self) {
        if !self.is_closed() {
            self.state = AuthState::Closed(Closure::Cancelled);
        }
    }

    fn finish(&mut self, grant: &SessionGrant) -> Result<()> {
        self.store.save(&grant.session_token)?;
        self.state = AuthState::Closed(Closure::Success(grant.clone()));
        Ok(())
    }

    fn expect_credentials_step(&self) -> Result<()> {
        match self.state {
            AuthState::Credentials => Ok(()),
            AuthState::TwoFactor { .. } => Err(Error::Other(
                "A two-factor code is pending; verify it or start over".to_string(),
            )),
            AuthState::Closed(_) => Err(Error::Other("Login flow already finished".to_string())),
        }
    }
}
