use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use regenera_core::Route;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::JoinForm => "FORM",
            Mode::Help => "HELP",
        };

        let location = match app.landing() {
            Some(view) => view.current_section().title().to_string(),
            None => app.route().path().to_string(),
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(" {} | {} | {}", mode_str, location, app.display_mode.label()),
        };

        let help_hint = match app.route() {
            Route::Landing => " q:quit j/k:scroll h/l:items f:join d:dashboard ?:help ",
            Route::Auth => " q:quit r:retry d:demo b:back ",
            Route::Dashboard => " q:quit h/l:cards Enter:open s:sign out b:back ",
            Route::Workspace => " q:quit Tab:tabs r:role s:sign out b:back ",
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
