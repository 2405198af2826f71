use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use regenera_core::content::JOIN_OPTIONS;

use super::popup::{centered_rect, truncate_str};
use crate::app::App;
use crate::screens::JoinField;

pub struct JoinFormWidget;

impl JoinFormWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let form = &app.join_form;
        let area = frame.area();
        let popup_width = 70u16.min(area.width.saturating_sub(4));
        let popup_height = 18u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);
        let field_width = popup_width.saturating_sub(8) as usize;

        frame.render_widget(Clear, popup_area);

        let joining_as = app
            .landing()
            .and_then(|view| view.join.active())
            .and_then(|id| JOIN_OPTIONS.iter().find(|option| option.id == *id))
            .map(|option| option.title)
            .unwrap_or("Member");

        let block = Block::default()
            .title(format!(" Join as {} ", joining_as))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines = Vec::new();
        for field in JoinField::ALL {
            let focused = form.field == field;
            let value = form.value(field);
            let label_style = if focused {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };
            lines.push(Line::from(Span::styled(format!(" {}", field.label()), label_style)));

            let input = if value.is_empty() && !focused {
                Span::styled(
                    truncate_str(field.placeholder(), field_width),
                    Style::default().fg(theme.grey0),
                )
            } else {
                // Keep the tail visible while typing past the box width
                let shown: String = {
                    let count = value.chars().count();
                    value.chars().skip(count.saturating_sub(field_width.saturating_sub(1))).collect()
                };
                Span::styled(shown, Style::default().fg(theme.fg0))
            };
            let mut input_line = vec![Span::raw("   "), input];
            if focused {
                input_line.push(Span::styled("█", Style::default().fg(theme.accent)));
            }
            lines.push(Line::from(input_line));
            lines.push(Line::from(""));
        }

        let submit_style = if form.can_submit() {
            Style::default().fg(theme.bg0).bg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey0).bg(theme.bg2)
        };
        lines.push(
            Line::from(Span::styled(" Connect with AI Matchmaker ", submit_style)).centered(),
        );
        lines.push(
            Line::from(Span::styled(
                "Tab: next field · Enter: submit · Esc: cancel",
                Style::default().fg(theme.muted),
            ))
            .centered(),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}
