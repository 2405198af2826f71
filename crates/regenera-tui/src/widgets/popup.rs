use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use regenera_core::Route;

use super::spinner;
use crate::app::App;

const HELP: &[(&str, &str)] = &[
    ("j/k  ↓/↑", "scroll the landing page"),
    ("C-d/C-u", "half page down / up"),
    ("g/G", "top / bottom"),
    ("h/l  ←/→", "move between pods, layers, options, cards"),
    ("Enter", "expand, enter, run"),
    ("f", "open the join form"),
    ("d", "dashboard (landing) / demo sign-in (auth)"),
    ("Tab/1-4", "workspace tabs"),
    ("r", "switch role (workspace) / retry (auth)"),
    ("s", "sign out"),
    ("m", "toggle Human / AI mode"),
    ("Esc/b", "back"),
    ("q", "quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let popup_width = 64u16.min(area.width.saturating_sub(4));
        let popup_height = (HELP.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = HELP
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<10}", keys),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled("any key to close", Style::default().fg(theme.muted)))
                .centered(),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Spinner shown while a protected screen waits for its session
pub struct LoadingWidget;

impl LoadingWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let message = match app.route() {
            Route::Workspace => "Loading ecosystem workspace...",
            _ => "Loading your regenerative workspace...",
        };

        let block = Block::default().style(Style::default().bg(theme.bg0));
        let inner = centered_rect(area.width, 3, area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                spinner(app.spinner_frame),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(theme.muted))).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate a string to max length with ellipsis
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
