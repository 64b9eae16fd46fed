//! CryptoMine API client

pub mod api;
pub mod cryptomine;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, MiningApi};
pub use cryptomine::CryptoMineClient;
#[cfg(test)]
pub use mock::MockCryptoMineClient;

/// Both services behind one client
pub trait CryptoMineApi: AuthApi + MiningApi {}

impl<T: AuthApi + MiningApi> CryptoMineApi for T {}
