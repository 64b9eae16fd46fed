//! Client-side flows built on the API traits
//!
//! Flows hold the rules about when requests are made and what happens to the
//! stored session; the `cli` module only collects input and prints results.

pub mod account;
pub mod auth;
pub mod calculator;
pub mod dashboard;

use std::future::Future;

use log::debug;

use crate::error::Result;
use crate::session::TokenStore;

/// Result of an operation that needs a session
#[derive(Debug)]
pub enum SessionOutcome<T> {
    Ready(T),

    /// No token stored; nothing was requested
    NotAuthenticated,

    /// The server refused the token and it has been cleared
    SessionExpired,
}

/// Run `call` with the stored session token.
///
/// A 401 from the server clears the token. Other failures are returned
/// unchanged and leave the token alone.
pub async fn with_session<S, T, F, Fut>(store: &S, call: F) -> Result<SessionOutcome<T>>
where
    S: TokenStore + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let Some(token) = store.load()? else {
        return Ok(SessionOutcome::NotAuthenticated);
    };

    match call(token).await {
        Ok(value) => Ok(SessionOutcome::Ready(value)),
        Err(e) if e.is_unauthorized() => {
            debug!("Session rejected: {}", e);
            store.clear()?;
            Ok(SessionOutcome::SessionExpired)
        }
        Err(e) => Err(e),
    }
}
