mod auth;
mod dashboard;
mod impact;
mod join_form;
mod landing;
mod popup;
mod status_bar;
mod toast;
mod workspace;

pub use auth::AuthWidget;
pub use dashboard::DashboardWidget;
pub use impact::ImpactWidget;
pub use join_form::JoinFormWidget;
pub use landing::LandingWidget;
pub use popup::{HelpWidget, LoadingWidget};
pub use status_bar::StatusBarWidget;
pub use toast::ToastWidget;
pub use workspace::WorkspaceWidget;

use unicode_width::UnicodeWidthStr;

/// Greedy word wrap by display width
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Text progress bar, `filled` in [0, 1]
pub(crate) fn progress_bar(filled: f64, width: usize) -> (String, String) {
    let done = ((filled.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    ("█".repeat(done), "░".repeat(width - done))
}

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("Beyond Capital. Toward Regeneration.", 16), vec![
            "Beyond Capital.",
            "Toward",
            "Regeneration.",
        ]);
        assert_eq!(wrap_text("", 10), vec![""]);
        // Overlong words stay whole
        assert_eq!(wrap_text("multi-consciousness", 5), vec!["multi-consciousness"]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        let lines = wrap_text("中文 中文 中文", 9);
        assert_eq!(lines, vec!["中文 中文", "中文"]);
    }

    #[test]
    fn test_progress_bar() {
        let (done, rest) = progress_bar(0.5, 10);
        assert_eq!(done.chars().count(), 5);
        assert_eq!(rest.chars().count(), 5);
        let (done, rest) = progress_bar(1.7, 4);
        assert_eq!((done.chars().count(), rest.chars().count()), (4, 0));
    }
}
