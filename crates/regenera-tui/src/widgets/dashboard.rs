use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use regenera_core::content::{Workspace, SECURITY_TILES, WORKSPACES};

use super::popup::truncate_str;
use crate::app::App;
use crate::screens::DashboardView;
use crate::theme::Theme;

pub struct DashboardWidget;

impl DashboardWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(view) = app.dashboard() else {
            return;
        };
        let theme = &app.theme;

        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(6), // Security tiles
                Constraint::Min(8),    // Workspace cards
            ])
            .split(area);

        Self::render_header(frame, chunks[0], view, theme);
        Self::render_security(frame, chunks[1], theme);
        Self::render_cards(frame, chunks[2], view, theme);
    }

    fn render_header(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
        let email = view.guard.session().map(|s| s.email()).unwrap_or("");
        let sign_out = if view.signing_out { "Signing out..." } else { "s: Sign Out" };

        let lines = vec![
            Line::from(vec![
                Span::styled("Welcome to ", Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled("Aeon Regenera", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
                Span::styled(format!("   {}", sign_out), Style::default().fg(theme.muted)),
            ]),
            Line::from(vec![
                Span::styled("Signed in as ", Style::default().fg(theme.muted)),
                Span::styled(email.to_string(), Style::default().fg(theme.accent)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme.grey0))),
            area,
        );
    }

    fn render_security(frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Universal Access & Security Layer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.grey0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, SECURITY_TILES.len() as u32); SECURITY_TILES.len()])
            .split(inner);

        for (tile, cell) in SECURITY_TILES.iter().zip(cells.iter()) {
            let color = theme.accent_color(tile.accent);
            let lines = vec![
                Line::from(Span::styled(tile.title, Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD))).centered(),
                Line::from(Span::styled(format!("● {}", tile.state), Style::default().fg(color))).centered(),
            ];
            frame.render_widget(Paragraph::new(lines), *cell);
        }
    }

    fn render_cards(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
        let block = Block::default()
            .title(" Multi-Consciousness Collaboration Workspaces ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.grey0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(inner);
        let mut cells = Vec::with_capacity(WORKSPACES.len());
        for row in rows.iter() {
            cells.extend(
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                    .split(*row)
                    .iter()
                    .copied(),
            );
        }

        let focused = view.focused().id;
        for (workspace, cell) in WORKSPACES.iter().zip(cells) {
            Self::render_card(frame, cell, workspace, workspace.id == focused, theme);
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, workspace: &Workspace, focused: bool, theme: &Theme) {
        let color = theme.accent_color(workspace.accent);
        let border_style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey0)
        };
        let block = Block::default()
            .title(format!(" {} ", workspace.title))
            .borders(Borders::ALL)
            .border_type(if focused { BorderType::Thick } else { BorderType::Plain })
            .border_style(border_style)
            .style(Style::default().bg(if focused { theme.bg1 } else { theme.bg0 }));

        let width = area.width.saturating_sub(4) as usize;
        let enter = if workspace.is_enterable() {
            "Enter Workspace"
        } else {
            "Coming Soon"
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", workspace.access_badge()), Style::default().fg(color)),
                Span::styled(truncate_str(workspace.access, width.saturating_sub(12)), Style::default().fg(theme.muted)),
            ]),
            Line::from(Span::styled(workspace.description, Style::default().fg(theme.fg1))),
            Line::from(Span::styled(
                truncate_str(&workspace.features.join(" · "), width),
                Style::default().fg(theme.muted),
            )),
            Line::from(Span::styled(
                if focused { format!("▶ {}", enter) } else { format!("  {}", enter) },
                Style::default().fg(if focused { color } else { theme.grey0 }),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
    }
}
