//! Dashboard loading and logout

use log::{debug, warn};

use super::SessionOutcome;
use crate::client::models::{DashboardSnapshot, User};
use crate::client::{AuthApi, CryptoMineApi};
use crate::error::{ApiError, Error, Result};
use crate::session::TokenStore;

pub const MSG_LOGGED_OUT: &str = "Logged out. See you soon!";

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: User,
    pub snapshot: DashboardSnapshot,
}

/// Load the profile and the mining snapshot for the stored session.
///
/// - no token: [`SessionOutcome::NotAuthenticated`], no requests made
/// - both requests succeed: [`SessionOutcome::Ready`]
/// - either request never got a response (or returned an unreadable body):
///   [`Error::LoadFailed`], token kept
/// - otherwise either request was rejected: token cleared,
///   [`SessionOutcome::SessionExpired`]
pub async fn load_dashboard<A, S>(api: &A, store: &S) -> Result<SessionOutcome<Dashboard>>
where
    A: CryptoMineApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let Some(token) = store.load()? else {
        debug!("No session token stored; skipping dashboard load");
        return Ok(SessionOutcome::NotAuthenticated);
    };

    let (user, snapshot) = futures::join!(api.me(&token), api.dashboard(&token));

    match (user, snapshot) {
        (Ok(user), Ok(snapshot)) => Ok(SessionOutcome::Ready(Dashboard { user, snapshot })),
        (user, snapshot) => {
            let (transport, rejections): (Vec<Error>, Vec<Error>) = [user.err(), snapshot.err()]
                .into_iter()
                .flatten()
                .partition(|e| !is_http_rejection(e));

            if let Some(cause) = transport.into_iter().next() {
                debug!("Dashboard load failed: {:?}", cause);
                return Err(Error::LoadFailed(Box::new(cause)));
            }

            debug!(
                "Dashboard requests rejected ({}); dropping session",
                rejections
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            );
            store.clear()?;
            Ok(SessionOutcome::SessionExpired)
        }
    }
}

fn is_http_rejection(err: &Error) -> bool {
    matches!(err, Error::Api(ApiError::Rejected { .. }))
}

/// End the session: tell the server if we can, then always forget the token.
///
/// A token that cannot be read is not sent anywhere, but the slot is still
/// cleared.
pub async fn logout<A, S>(api: &A, store: &S) -> Result<()>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let token = store.load().unwrap_or_else(|e| {
        warn!("Cannot read stored session, skipping remote logout: {}", e);
        None
    });

    if let Some(token) = token {
        if let Err(e) = api.logout(&token).await {
            debug!("Remote logout failed, clearing local session anyway: {}", e);
        }
    }

    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCryptoMineClient;
    use crate::client::models::DailyStat;
    use crate::session::ConfigTokenStore;
    use crate::session::memory::MemoryTokenStore;

    fn rejected(status: u16) -> ApiError {
        ApiError::Rejected {
            status,
            message: Some("Invalid session".to_string()),
        }
    }

    #[tokio::test]
    async fn test_no_token_means_no_requests() {
        let api = MockCryptoMineClient::new();
        let store = MemoryTokenStore::new();

        let outcome = load_dashboard(&api, &store).await.unwrap();

        assert!(matches!(outcome, SessionOutcome::NotAuthenticated));
        assert_eq!(api.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_loads_profile_and_stats_with_stored_token() {
        let snapshot = DashboardSnapshot {
            recent_stats: vec![DailyStat {
                date: "2024-05-01".to_string(),
                daily_btc: 0.0001,
                daily_profit: 4.2,
            }],
            ..Default::default()
        };
        let api = MockCryptoMineClient::new()
            .with_dashboard(Ok(snapshot))
            .await;
        let store = MemoryTokenStore::with_token("tok-1");

        let outcome = load_dashboard(&api, &store).await.unwrap();

        match outcome {
            SessionOutcome::Ready(dashboard) => {
                assert_eq!(dashboard.user.email, "miner@example.com");
                assert_eq!(dashboard.snapshot.recent_stats.len(), 1);
            }
            other => panic!("Expected Ready, got {:?}", other),
        }

        let counts = api.call_counts().await;
        assert_eq!(counts.me, 1);
        assert_eq!(counts.dashboard, 1);
        assert_eq!(api.captured().await.session_tokens, vec!["tok-1", "tok-1"]);
        assert_eq!(store.current().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_rejected_profile_clears_token() {
        let api = MockCryptoMineClient::new()
            .with_me(Err(rejected(401)))
            .await;
        let store = MemoryTokenStore::with_token("stale");

        let outcome = load_dashboard(&api, &store).await.unwrap();

        assert!(matches!(outcome, SessionOutcome::SessionExpired));
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_rejected_stats_clears_token() {
        let api = MockCryptoMineClient::new()
            .with_dashboard(Err(rejected(500)))
            .await;
        let store = MemoryTokenStore::with_token("tok");

        let outcome = load_dashboard(&api, &store).await.unwrap();

        assert!(matches!(outcome, SessionOutcome::SessionExpired));
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_token() {
        let api = MockCryptoMineClient::new()
            .with_dashboard(Err(ApiError::Network("connection reset".to_string())))
            .await;
        let store = MemoryTokenStore::with_token("tok");

        let err = load_dashboard(&api, &store).await.unwrap_err();

        assert!(matches!(err, Error::LoadFailed(_)));
        assert_eq!(err.to_string(), "Failed to load data");
        assert_eq!(store.current().as_deref(), Some("tok"));
        assert_eq!(*store.clears.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_wins_over_rejection() {
        let api = MockCryptoMineClient::new()
            .with_me(Err(rejected(401)))
            .await
            .with_dashboard(Err(ApiError::Network("timeout".to_string())))
            .await;
        let store = MemoryTokenStore::with_token("tok");

        let err = load_dashboard(&api, &store).await.unwrap_err();

        assert!(matches!(err, Error::LoadFailed(_)));
        assert_eq!(store.current().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_load_failure() {
        let api = MockCryptoMineClient::new()
            .with_dashboard(Err(ApiError::InvalidResponse("expected value".to_string())))
            .await;
        let store = MemoryTokenStore::with_token("tok");

        assert!(matches!(
            load_dashboard(&api, &store).await,
            Err(Error::LoadFailed(_))
        ));
        assert_eq!(store.current().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_logout_clears_token_and_notifies_server() {
        let api = MockCryptoMineClient::new();
        let store = MemoryTokenStore::with_token("tok");

        logout(&api, &store).await.unwrap();

        assert_eq!(api.call_counts().await.logout, 1);
        assert_eq!(api.captured().await.session_tokens, vec!["tok"]);
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_logout_ignores_remote_failure() {
        let api = MockCryptoMineClient::new()
            .with_logout(Err(ApiError::Network("down".to_string())))
            .await;
        let store = MemoryTokenStore::with_token("tok");

        logout(&api, &store).await.unwrap();

        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn test_logout_with_unparseable_config_still_clears_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "session_token: tok\npreferences: [unclosed\n").unwrap();
        let store = ConfigTokenStore::new(path.to_str());
        let api = MockCryptoMineClient::new();

        logout(&api, &store).await.unwrap();

        assert_eq!(api.call_counts().await.logout, 0);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("session_token"));
        assert!(contents.contains("preferences: [unclosed"));
    }

    #[tokio::test]
    async fn test_logout_without_session_skips_remote_call() {
        let api = MockCryptoMineClient::new();
        let store = MemoryTokenStore::new();

        logout(&api, &store).await.unwrap();

        assert_eq!(api.call_counts().await.logout, 0);
    }
}
