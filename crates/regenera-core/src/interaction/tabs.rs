use std::fmt::Debug;

use tracing::debug;

/// A fixed, ordered set of tab panels
pub trait TabSet: Copy + Eq + Debug + 'static {
    /// Every tab, in display order
    const ALL: &'static [Self];

    /// Stable identifier (e.g. "soil-data")
    fn id(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.id() == id)
    }
}

/// Exactly one active tab out of `T::ALL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNavigator<T: TabSet> {
    active: T,
}

impl<T: TabSet + Default> Default for TabNavigator<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: TabSet> TabNavigator<T> {
    pub fn new(initial: T) -> Self {
        Self { active: initial }
    }

    #[inline]
    pub fn active(&self) -> T {
        self.active
    }

    /// Position of the active tab in `T::ALL`
    pub fn index(&self) -> usize {
        T::ALL
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0)
    }

    /// Activate the tab with `id`; unknown ids leave the state unchanged
    pub fn select(&mut self, id: &str) -> bool {
        match T::from_id(id) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => {
                debug!("Ignoring unknown tab id '{}'", id);
                false
            }
        }
    }

    /// Activate the following tab, wrapping around
    pub fn next(&mut self) -> T {
        if !T::ALL.is_empty() {
            self.active = T::ALL[(self.index() + 1) % T::ALL.len()];
        }
        self.active
    }

    /// Activate the preceding tab, wrapping around
    pub fn prev(&mut self) -> T {
        if !T::ALL.is_empty() {
            let len = T::ALL.len();
            self.active = T::ALL[(self.index() + len - 1) % len];
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WorkspaceTab;

    #[test]
    fn test_default_tab() {
        let tabs = TabNavigator::<WorkspaceTab>::default();
        assert_eq!(tabs.active(), WorkspaceTab::SoilData);
        assert_eq!(tabs.index(), 0);
    }

    #[test]
    fn test_select_known_id() {
        let mut tabs = TabNavigator::<WorkspaceTab>::default();
        assert!(tabs.select("impact-kpis"));
        assert_eq!(tabs.active(), WorkspaceTab::ImpactKpis);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut tabs = TabNavigator::new(WorkspaceTab::AiModels);
        assert!(!tabs.select("billing"));
        assert!(!tabs.select(""));
        assert!(!tabs.select("Soil-Data"));
        assert_eq!(tabs.active(), WorkspaceTab::AiModels);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut tabs = TabNavigator::<WorkspaceTab>::default();
        assert_eq!(tabs.prev(), WorkspaceTab::RestorationTracking);
        assert_eq!(tabs.next(), WorkspaceTab::SoilData);
        assert_eq!(tabs.next(), WorkspaceTab::AiModels);
    }

    #[test]
    fn test_ids_round_trip() {
        for tab in WorkspaceTab::ALL {
            assert_eq!(WorkspaceTab::from_id(tab.id()), Some(*tab));
        }
    }
}
