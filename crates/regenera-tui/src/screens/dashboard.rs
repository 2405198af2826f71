use regenera_core::auth::AuthSubscription;
use regenera_core::content::{Workspace, WORKSPACES};
use regenera_core::interaction::Selection;

use super::Protected;

/// Signed-in landing spot listing the collaboration workspaces
#[derive(Debug)]
pub struct DashboardView {
    pub guard: Protected,
    /// Focused workspace card
    pub cards: Selection<&'static str>,
    /// A sign-out request is in flight
    pub signing_out: bool,
}

impl DashboardView {
    pub fn mount(subscription: AuthSubscription) -> Self {
        Self {
            guard: Protected::mount(subscription),
            cards: Selection::with_active(WORKSPACES[0].id),
            signing_out: false,
        }
    }

    pub fn focused(&self) -> &'static Workspace {
        self.cards
            .active()
            .and_then(|id| WORKSPACES.iter().find(|w| w.id == *id))
            .unwrap_or(&WORKSPACES[0])
    }

    pub fn focus_step(&mut self, delta: isize) {
        let len = WORKSPACES.len() as isize;
        let index = WORKSPACES
            .iter()
            .position(|w| w.id == self.focused().id)
            .unwrap_or(0) as isize;
        let next = (index + delta).rem_euclid(len) as usize;
        self.cards.set(WORKSPACES[next].id);
    }

    pub fn unmount(self) {
        self.guard.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regenera_core::auth::MemoryAuth;
    use regenera_core::IdentityProvider;

    #[test]
    fn test_focus_wraps_around_cards() {
        let auth = MemoryAuth::demo();
        let mut view = DashboardView::mount(auth.subscribe());
        assert_eq!(view.focused().id, "ecosystem");
        assert!(view.guard.is_loading());

        view.focus_step(-1);
        assert_eq!(view.focused().id, WORKSPACES[WORKSPACES.len() - 1].id);
        view.focus_step(2);
        assert_eq!(view.focused().id, WORKSPACES[1].id);
        assert!(!view.focused().is_enterable());
    }
}
