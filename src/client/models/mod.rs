//! CryptoMine API data models
//!
//! Wire types for the auth service and the mining-stats service.

mod account;
mod auth;
mod dashboard;
pub mod number;
mod user;

pub use account::{AccountStat, CreateAccountRequest, MiningAccount};
pub use auth::{
    LoginOutcome, LoginRequest, LoginResponse, RegisterRequest, SessionGrant, TwoFactorSetup,
    VerifyTwoFactorRequest,
};
pub use dashboard::{DailyStat, DashboardSnapshot, Subscription, Summary};
pub use user::{User, UserEnvelope};
