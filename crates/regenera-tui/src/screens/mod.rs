//! Per-screen state, mounted and released by [`crate::App::navigate`]

mod dashboard;
mod join;
mod landing;
mod workspace;

pub use dashboard::DashboardView;
pub use join::{JoinField, JoinForm};
pub use landing::{CounterFrame, LandingSection, LandingView};
pub use workspace::{SimulationStart, WorkspaceView};

use regenera_core::auth::{on_auth_event, AuthSubscription};
use regenera_core::{Route, Session};
use tracing::debug;

/// Session gate shared by the protected screens
///
/// Starts out loading; the session check result either grants it a session
/// or the app redirects away. While mounted it listens for auth changes.
#[derive(Debug)]
pub struct Protected {
    session: Option<Session>,
    subscription: Option<AuthSubscription>,
}

impl Protected {
    pub fn mount(subscription: AuthSubscription) -> Self {
        Self {
            session: None,
            subscription: Some(subscription),
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn grant(&mut self, session: Session) {
        debug!("Session granted for {}", session.email());
        self.session = Some(session);
    }

    /// Drain pending auth events; returns a redirect if one of them ends the session
    pub fn poll(&mut self) -> Option<Route> {
        let subscription = self.subscription.as_mut()?;
        while let Some(event) = subscription.try_recv() {
            if let Some(route) = on_auth_event(&event) {
                return Some(route);
            }
            if let Some(session) = event.session {
                self.session = Some(session);
            }
        }
        None
    }

    pub fn release(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
