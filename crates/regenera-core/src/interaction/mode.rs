/// Footer display mode easter egg
///
/// Owned by the application state and passed to whatever renders with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Human,
    Ai,
}

impl DisplayMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Human => DisplayMode::Ai,
            DisplayMode::Ai => DisplayMode::Human,
        }
    }

    /// Flip in place and return the new mode
    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        *self
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Human => "Human Mode",
            DisplayMode::Ai => "AI Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_mode() {
        let mut mode = DisplayMode::default();
        assert_eq!(mode.toggle(), DisplayMode::Ai);
        assert_eq!(mode, DisplayMode::Ai);
        assert_eq!(mode.toggle(), DisplayMode::Human);
        assert_eq!(DisplayMode::Ai.label(), "AI Mode");
    }
}
