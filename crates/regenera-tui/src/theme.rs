use ratatui::style::Color;

use regenera_core::content::Accent;
use regenera_core::interaction::DisplayMode;

/// Runtime theme, rebuilt whenever the display mode flips
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,
    pub grey0: Color,

    // Site palette
    pub primary: Color,
    pub consciousness: Color,
    pub neon: Color,
    pub innovation: Color,

    // Semantic colors
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    /// Follows the display mode
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(DisplayMode::default())
    }
}

impl Theme {
    pub fn for_mode(mode: DisplayMode) -> Self {
        let accent = match mode {
            DisplayMode::Human => Color::Rgb(0x2d, 0xd4, 0xbf),
            DisplayMode::Ai => Color::Rgb(0xa8, 0x55, 0xf7),
        };
        Self {
            bg0: Color::Rgb(0x0b, 0x10, 0x1a),
            bg1: Color::Rgb(0x13, 0x1a, 0x27),
            bg2: Color::Rgb(0x1e, 0x27, 0x38),
            fg0: Color::Rgb(0xe6, 0xed, 0xf3),
            fg1: Color::Rgb(0xc9, 0xd3, 0xdd),
            muted: Color::Rgb(0x8b, 0x98, 0xa9),
            grey0: Color::Rgb(0x4b, 0x57, 0x69),
            primary: Color::Rgb(0x38, 0xbd, 0xf8),
            consciousness: Color::Rgb(0xa8, 0x55, 0xf7),
            neon: Color::Rgb(0x4a, 0xde, 0x80),
            innovation: Color::Rgb(0xfb, 0x92, 0x3c),
            selection: Color::Rgb(0x26, 0x33, 0x4a),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            warning: Color::Rgb(0xfa, 0xcc, 0x15),
            info: Color::Rgb(0x60, 0xa5, 0xfa),
            accent,
        }
    }

    /// Color for a content accent tag
    pub fn accent_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Primary => self.primary,
            Accent::Accent => self.accent,
            Accent::Neon => self.neon,
            Accent::Success => self.success,
            Accent::Warning => self.warning,
            Accent::Innovation => self.innovation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_follows_mode() {
        let human = Theme::for_mode(DisplayMode::Human);
        let ai = Theme::for_mode(DisplayMode::Ai);
        assert_ne!(human.accent, ai.accent);
        assert_eq!(human.primary, ai.primary);
        assert_eq!(ai.accent_color(Accent::Accent), ai.accent);
    }
}
