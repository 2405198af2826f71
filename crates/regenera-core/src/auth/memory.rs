use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use super::{AuthEvent, AuthEvents, AuthSubscription, IdentityProvider, Session, User};
use crate::{Error, Result};

/// In-process identity provider
///
/// Backs the offline demo and tests. Sign-out can be made to fail to
/// exercise error reporting.
#[derive(Debug)]
pub struct MemoryAuth {
    session: Mutex<Option<Session>>,
    fail_sign_out: AtomicBool,
    events: AuthEvents,
}

impl MemoryAuth {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: Mutex::new(session),
            fail_sign_out: AtomicBool::new(false),
            events: AuthEvents::new(),
        }
    }

    /// Provider already signed in with [`MemoryAuth::demo_session`]
    pub fn demo() -> Self {
        Self::new(Some(Self::demo_session()))
    }

    pub fn demo_session() -> Session {
        Session {
            access_token: format!("demo-{}", Uuid::new_v4()),
            refresh_token: None,
            expires_at: Some(Utc::now() + Duration::hours(12)),
            user: User {
                id: Uuid::new_v4(),
                email: Some("demo@aeonregenera.earth".to_string()),
            },
        }
    }

    /// Make subsequent sign-outs fail (or succeed again)
    pub fn set_fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }

    /// Replace the session and notify subscribers
    pub fn sign_in(&self, session: Session) {
        *self.lock() = Some(session.clone());
        self.events.emit(AuthEvent::signed_in(session));
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MemoryAuth {
    async fn get_session(&self) -> Result<Option<Session>> {
        let now = Utc::now();
        Ok(self.lock().clone().filter(|session| !session.is_expired(now)))
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(Error::Auth("sign-out rejected".to_string()));
        }
        let previous = self.lock().take();
        if let Some(session) = previous {
            info!("Signed out {}", session.email());
        }
        self.events.emit(AuthEvent::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> AuthSubscription {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthEventKind;

    #[tokio::test]
    async fn test_sign_out_notifies_and_clears() {
        let auth = MemoryAuth::demo();
        let mut subscription = auth.subscribe();
        assert!(auth.get_session().await.unwrap().is_some());

        auth.sign_out().await.unwrap();

        assert!(auth.get_session().await.unwrap().is_none());
        let event = subscription.recv().await.unwrap();
        assert_eq!(event.kind, AuthEventKind::SignedOut);
        assert!(event.session.is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_session() {
        let auth = MemoryAuth::demo();
        let mut subscription = auth.subscribe();
        auth.set_fail_sign_out(true);

        assert!(matches!(auth.sign_out().await, Err(Error::Auth(_))));
        assert!(auth.get_session().await.unwrap().is_some());
        assert!(subscription.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_absent() {
        let mut session = MemoryAuth::demo_session();
        session.expires_at = Some(Utc::now() - Duration::minutes(1));
        let auth = MemoryAuth::new(Some(session));
        assert!(auth.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_emits_event() {
        let auth = MemoryAuth::new(None);
        let mut subscription = auth.subscribe();
        auth.sign_in(MemoryAuth::demo_session());
        assert_eq!(subscription.try_recv().map(|e| e.kind), Some(AuthEventKind::SignedIn));
    }
}
