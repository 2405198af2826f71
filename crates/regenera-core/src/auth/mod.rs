//! Boundary with the managed identity backend
//!
//! Views only ever see [`IdentityProvider`]: fetch the current session,
//! sign out, and listen for auth-state changes. `SupabaseAuth` talks to a
//! GoTrue REST endpoint; `MemoryAuth` keeps everything in process for the
//! offline demo and for tests.

mod guard;
mod memory;
mod store;
mod supabase;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::warn;
use uuid::Uuid;

use crate::Result;

pub use guard::{check_access, guard_session, on_auth_event, Access};
pub use memory::MemoryAuth;
pub use store::SessionStore;
pub use supabase::SupabaseAuth;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Signed-in session as handed out by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub fn email(&self) -> &str {
        self.user.email.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// Auth-state change pushed to subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub session: Option<Session>,
}

impl AuthEvent {
    pub fn signed_in(session: Session) -> Self {
        Self {
            kind: AuthEventKind::SignedIn,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: AuthEventKind::SignedOut,
            session: None,
        }
    }

    pub fn token_refreshed(session: Session) -> Self {
        Self {
            kind: AuthEventKind::TokenRefreshed,
            session: Some(session),
        }
    }
}

/// Identity backend used as a black box by the dashboard and workspace
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current session, `None` when signed out or expired
    async fn get_session(&self) -> Result<Option<Session>>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// Listen for auth-state changes until the subscription is released
    fn subscribe(&self) -> AuthSubscription;
}

const EVENT_CAPACITY: usize = 16;

/// Fan-out of auth events to every live subscription
#[derive(Debug, Clone)]
pub(crate) struct AuthEvents {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthEvents {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    pub(crate) fn emit(&self, event: AuthEvent) {
        // No receivers is fine: nobody is mounted
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Live auth-state subscription
#[derive(Debug)]
pub struct AuthSubscription {
    rx: broadcast::Receiver<AuthEvent>,
}

impl AuthSubscription {
    /// Wait for the next event; `None` once the provider is gone
    pub async fn recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Auth subscription lagged, {} events skipped", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Next already-delivered event, without waiting
    pub fn try_recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!("Auth subscription lagged, {} events skipped", skipped);
                }
                Err(_) => return None,
            }
        }
    }

    /// Stop listening
    pub fn unsubscribe(self) {
        drop(self.rx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            access_token: "token".to_string(),
            refresh_token: None,
            expires_at,
            user: User {
                id: Uuid::new_v4(),
                email: Some("nova@aeonregenera.earth".to_string()),
            },
        }
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        assert!(!session(None).is_expired(now));
        assert!(!session(Some(now + Duration::minutes(5))).is_expired(now));
        assert!(session(Some(now - Duration::seconds(1))).is_expired(now));
    }

    #[test]
    fn test_events_reach_every_subscriber() {
        let events = AuthEvents::new();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        events.emit(AuthEvent::signed_out());

        assert_eq!(first.try_recv().map(|e| e.kind), Some(AuthEventKind::SignedOut));
        assert_eq!(second.try_recv().map(|e| e.kind), Some(AuthEventKind::SignedOut));
        assert!(first.try_recv().is_none());
    }

    #[test]
    fn test_unsubscribed_listener_gets_nothing() {
        let events = AuthEvents::new();
        let listener = events.subscribe();
        listener.unsubscribe();
        // Emitting with no receivers left must not fail
        events.emit(AuthEvent::signed_in(session(None)));
    }
}
