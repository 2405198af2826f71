use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ToastKind};

const TOAST_WIDTH: u16 = 44;

/// Stack of toasts in the top-right corner, newest at the bottom
pub struct ToastWidget;

impl ToastWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut y = area.y + 1;

        for toast in &app.toasts {
            let height = if toast.detail.is_some() { 4 } else { 3 };
            if y + height > area.bottom() {
                break;
            }
            let color = match toast.kind {
                ToastKind::Info => theme.info,
                ToastKind::Success => theme.success,
                ToastKind::Error => theme.error,
            };
            let rect = Rect::new(x, y, width, height);
            frame.render_widget(Clear, rect);

            let mut lines = vec![Line::from(Span::styled(
                toast.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))];
            if let Some(detail) = &toast.detail {
                lines.push(Line::from(Span::styled(detail.clone(), Style::default().fg(theme.fg1))));
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.bg1));
            frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), rect);
            y += height;
        }
    }
}
