use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::popup::centered_rect;
use crate::app::App;

/// Sign-in screen; protected screens redirect here without a session
pub struct AuthWidget;

impl AuthWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let card = centered_rect(60, 14, area);
        let block = Block::default()
            .title(" Sign In ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let key = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.fg1);
        let mut lines = vec![
            Line::from(Span::styled(
                "Join the Regenerative Movement",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                "A workspace session is required to continue.",
                Style::default().fg(theme.muted),
            ))
            .centered(),
            Line::from(""),
        ];

        if app.is_offline() {
            lines.push(Line::from(vec![
                Span::styled("  d  ", key),
                Span::styled("sign in with the demo account", text),
            ]));
        } else {
            lines.push(Line::from(Span::styled("  From a shell:", text)));
            lines.push(Line::from(Span::styled(
                "    regenera login --email <email> --password <password>",
                Style::default().fg(theme.primary),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("  r  ", key),
            Span::styled("check the session again", text),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  b  ", key),
            Span::styled("back to the landing page", text),
        ]));
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Secure, privacy-first access to your regenerative workspace",
                Style::default().fg(theme.grey0),
            ))
            .centered(),
        );

        frame.render_widget(Paragraph::new(lines).block(block), card);
    }
}
