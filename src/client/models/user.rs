//! User profile model

use serde::{Deserialize, Serialize};

use super::number::lenient_id;

/// Profile returned by the auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    /// User email address
    pub email: String,

    /// Display name
    #[serde(default)]
    pub full_name: String,

    /// Whether a second factor is enrolled (only on `action=me`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_enabled: Option<bool>,

    /// Account creation time as reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Envelope of `action=me`
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}
