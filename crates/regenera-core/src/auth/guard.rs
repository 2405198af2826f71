use tracing::{debug, warn};

use super::{AuthEvent, AuthEventKind, IdentityProvider, Session};
use crate::route::Route;

/// Outcome of checking a protected screen's session
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted(Session),
    Redirect(Route),
}

/// Protected screens need a session; without one they redirect to sign-in
pub fn guard_session(session: Option<Session>) -> Access {
    match session {
        Some(session) => Access::Granted(session),
        None => Access::Redirect(Route::Auth),
    }
}

/// Redirect target for an auth event received while a protected screen is mounted
pub fn on_auth_event(event: &AuthEvent) -> Option<Route> {
    if event.kind == AuthEventKind::SignedOut || event.session.is_none() {
        debug!("Auth event {:?} without session, redirecting", event.kind);
        Some(Route::Auth)
    } else {
        None
    }
}

/// Fetch the session and decide; a failing backend counts as signed out
pub async fn check_access(provider: &dyn IdentityProvider) -> Access {
    match provider.get_session().await {
        Ok(session) => guard_session(session),
        Err(e) => {
            warn!("Failed to fetch session: {}", e);
            Access::Redirect(Route::Auth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryAuth;

    #[test]
    fn test_missing_session_redirects() {
        assert_eq!(guard_session(None), Access::Redirect(Route::Auth));
    }

    #[test]
    fn test_events() {
        let session = MemoryAuth::demo_session();
        assert_eq!(on_auth_event(&AuthEvent::signed_out()), Some(Route::Auth));
        assert_eq!(on_auth_event(&AuthEvent::signed_in(session.clone())), None);
        assert_eq!(on_auth_event(&AuthEvent::token_refreshed(session)), None);

        let empty_update = AuthEvent {
            kind: AuthEventKind::UserUpdated,
            session: None,
        };
        assert_eq!(on_auth_event(&empty_update), Some(Route::Auth));
    }

    #[tokio::test]
    async fn test_check_access() {
        let signed_in = MemoryAuth::demo();
        assert!(matches!(check_access(&signed_in).await, Access::Granted(_)));

        let signed_out = MemoryAuth::new(None);
        assert_eq!(check_access(&signed_out).await, Access::Redirect(Route::Auth));
    }
}
