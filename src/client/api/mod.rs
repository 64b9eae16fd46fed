//! API trait definitions split by service
//!
//! - [`AuthApi`] - the auth service (register, login, 2FA, profile, logout)
//! - [`MiningApi`] - the mining-stats service (dashboard, accounts)
//!
//! The [`CryptoMineApi`](super::CryptoMineApi) super-trait combines both.

mod auth;
mod mining;

pub use auth::AuthApi;
pub use mining::MiningApi;
