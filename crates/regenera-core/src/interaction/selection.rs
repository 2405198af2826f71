/// Next active id after toggling `id`: cleared if it was active, otherwise `id`
pub fn toggled<Id: PartialEq>(active: Option<Id>, id: Id) -> Option<Id> {
    if active.as_ref() == Some(&id) {
        None
    } else {
        Some(id)
    }
}

/// Single active item among a small fixed set
///
/// Used for hover highlights (`set`/`clear`) as well as click-to-expand
/// cards (`toggle`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    active: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<Id: PartialEq> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `id` active
    pub fn with_active(id: Id) -> Self {
        Self { active: Some(id) }
    }

    /// Deselect `id` if active, otherwise make it the active item
    pub fn toggle(&mut self, id: Id) -> Option<&Id> {
        self.active = toggled(self.active.take(), id);
        self.active.as_ref()
    }

    /// Make `id` active regardless of the current state
    pub fn set(&mut self, id: Id) {
        self.active = Some(id);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_active(&self, id: &Id) -> bool {
        self.active.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sequence() {
        let mut pods: Selection<&str> = Selection::new();
        assert_eq!(pods.active(), None);

        assert_eq!(pods.toggle("pod-2"), Some(&"pod-2"));
        assert_eq!(pods.toggle("pod-2"), None);

        pods.toggle("pod-2");
        assert_eq!(pods.toggle("pod-3"), Some(&"pod-3"));
        assert!(pods.is_active(&"pod-3"));
        assert!(!pods.is_active(&"pod-2"));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        for start in [None, Some(1u32), Some(4)] {
            let mut selection = Selection { active: start };
            selection.toggle(4);
            selection.toggle(4);
            let expected = if start == Some(4) { Some(4) } else { None };
            assert_eq!(selection.active().copied(), expected);
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut hover = Selection::with_active(1u32);
        hover.set(1);
        assert_eq!(hover.active(), Some(&1));
        hover.set(2);
        assert_eq!(hover.active(), Some(&2));
        hover.clear();
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn test_independent_instances() {
        let mut layers: Selection<&str> = Selection::new();
        let mut options: Selection<&str> = Selection::new();
        layers.toggle("human");
        assert_eq!(options.active(), None);
        options.toggle("investor");
        assert_eq!(layers.active(), Some(&"human"));
    }

    #[test]
    fn test_toggled_is_pure() {
        assert_eq!(toggled(None, "a"), Some("a"));
        assert_eq!(toggled(Some("a"), "a"), None);
        assert_eq!(toggled(Some("a"), "b"), Some("b"));
    }
}
