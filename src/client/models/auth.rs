//! Authentication models

use serde::{Deserialize, Serialize};

use super::User;
use crate::error::ApiError;

/// Body for `action=register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Body for `action=login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `action=verify-2fa`
#[derive(Debug, Clone, Serialize)]
pub struct VerifyTwoFactorRequest {
    pub temp_token: String,
    pub code: String,
}

/// A freshly issued session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionGrant {
    /// Token to send as `X-Session-Token`
    pub session_token: String,

    /// Profile of the user the session belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Raw `action=login` response; exactly one of the two shapes is populated
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub requires_2fa: bool,

    #[serde(default)]
    pub temp_token: Option<String>,

    #[serde(default)]
    pub session_token: Option<String>,

    #[serde(default)]
    pub user: Option<User>,
}

/// What a successful login call led to
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// A second factor is needed; `temp_token` is only good for verification
    TwoFactorRequired { temp_token: String },

    /// Logged in outright
    Authenticated(SessionGrant),
}

impl TryFrom<LoginResponse> for LoginOutcome {
    type Error = ApiError;

    fn try_from(response: LoginResponse) -> Result<Self, Self::Error> {
        if response.requires_2fa {
            let temp_token = response.temp_token.ok_or_else(|| {
                ApiError::InvalidResponse("2FA required but no temp_token returned".to_string())
            })?;
            return Ok(LoginOutcome::TwoFactorRequired { temp_token });
        }

        let session_token = response.session_token.ok_or_else(|| {
            ApiError::InvalidResponse("Login response has no session_token".to_string())
        })?;

        Ok(LoginOutcome::Authenticated(SessionGrant {
            session_token,
            user: response.user,
        }))
    }
}

/// Response of `action=enable-2fa`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorSetup {
    /// Base32 TOTP secret
    pub secret: String,

    /// `otpauth://` provisioning URI for authenticator apps
    pub qr_uri: String,
}
