use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
    Frame,
};

use regenera_core::content::{
    timeline, UserRole, WorkspaceTab, AI_MODELS, IMPACT_KPIS, SENSORS, SOIL_REGIONS,
};
use regenera_core::interaction::{TabSet, TaskStatus};

use super::progress_bar;
use crate::app::App;
use crate::screens::WorkspaceView;
use crate::theme::Theme;

pub struct WorkspaceWidget;

impl WorkspaceWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(view) = app.workspace() else {
            return;
        };
        let theme = &app.theme;

        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Tabs
                Constraint::Min(6),    // Panel
            ])
            .split(area);

        Self::render_header(frame, chunks[0], view, theme);
        Self::render_tabs(frame, chunks[1], view, theme);

        let block = Block::default()
            .title(format!(" {} ", view.tabs.active().label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.grey0));
        let inner = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);

        let lines = panel_lines(view, theme);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_header(frame: &mut Frame, area: Rect, view: &WorkspaceView, theme: &Theme) {
        let role_color = match view.role {
            UserRole::Team => theme.primary,
            UserRole::Auditor => theme.warning,
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("Ecosystem Healing ", Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled("Workspace", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
                Span::raw("   "),
                Span::styled(format!(" {} ", view.role.label()), Style::default().fg(theme.bg0).bg(role_color)),
                Span::styled("  r: switch role", Style::default().fg(theme.muted)),
            ]),
            Line::from(Span::styled(
                "Soil regeneration, biodiversity metrics, AI restoration models",
                Style::default().fg(theme.muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.grey0)),
            ),
            area,
        );
    }

    fn render_tabs(frame: &mut Frame, area: Rect, view: &WorkspaceView, theme: &Theme) {
        let titles: Vec<Line> = WorkspaceTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(view.tabs.index())
            .style(Style::default().fg(theme.muted))
            .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
            .divider(Span::styled("│", Style::default().fg(theme.grey0)));
        frame.render_widget(tabs, area);
    }
}

/// Content of the active tab
fn panel_lines(view: &WorkspaceView, theme: &Theme) -> Vec<Line<'static>> {
    match view.tabs.active() {
        WorkspaceTab::SoilData => soil_lines(view.role, theme),
        WorkspaceTab::AiModels => model_lines(view, theme),
        WorkspaceTab::ImpactKpis => kpi_lines(theme),
        WorkspaceTab::RestorationTracking => timeline_lines(view.role, theme),
    }
}

fn soil_lines(role: UserRole, theme: &Theme) -> Vec<Line<'static>> {
    let header = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Soil Regions", header)),
        Line::from(Span::styled(
            format!("  {:<24} {:>5} {:>9} {:>8}  {}", "Region", "pH", "Moisture", "Carbon", "Status"),
            Style::default().fg(theme.muted),
        )),
    ];
    for region in SOIL_REGIONS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "  {:<24} {:>5.1} {:>8}% {:>7.1}%  ",
                    region.name, region.ph, region.moisture, region.carbon
                ),
                Style::default().fg(theme.fg1),
            ),
            Span::styled(region.status.label(), Style::default().fg(theme.success)),
        ]));
    }

    lines.push(Line::from(""));
    let mut sensor_header = vec![Span::styled("Live Sensors", header)];
    if role.can_operate() {
        sensor_header.push(Span::styled("   [ Refresh Sensors ]", Style::default().fg(theme.primary)));
    }
    lines.push(Line::from(sensor_header));
    for sensor in SENSORS {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(theme.success)),
            Span::styled(
                format!("{:<9} {:>6.1}  {:<8}", sensor.kind, sensor.value, sensor.location),
                Style::default().fg(theme.fg1),
            ),
            Span::styled(sensor.last_update, Style::default().fg(theme.muted)),
        ]));
    }
    lines
}

fn model_lines(view: &WorkspaceView, theme: &Theme) -> Vec<Line<'static>> {
    let selected = view.selected_model().id;
    let mut lines = vec![Line::from(Span::styled(
        "Restoration Models",
        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
    ))];

    for model in AI_MODELS {
        let active = model.id == selected;
        let marker = if active { "▶ " } else { "  " };
        let name_style = if active {
            Style::default().fg(theme.accent).bg(theme.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg1)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(model.name, name_style),
            Span::styled(format!("  [{}]", model.status.label()), Style::default().fg(theme.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", model.description),
            Style::default().fg(theme.muted),
        )));
    }

    lines.push(Line::from(""));
    let button = if !view.role.can_operate() {
        Span::styled(" Run Simulation (team only) ", Style::default().fg(theme.grey0).bg(theme.bg2))
    } else if view.simulation_status() == TaskStatus::Running {
        Span::styled(" Running... ", Style::default().fg(theme.bg0).bg(theme.warning))
    } else {
        Span::styled(
            " Run Simulation ",
            Style::default().fg(theme.bg0).bg(theme.primary).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(vec![
        button,
        Span::styled("  j/k: pick model · Enter: run", Style::default().fg(theme.muted)),
    ]));
    lines
}

fn kpi_lines(theme: &Theme) -> Vec<Line<'static>> {
    let kpis = IMPACT_KPIS;
    let value = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.muted);
    let row = |v: String, l: &'static str| {
        Line::from(vec![Span::styled(format!("  {:>8}  ", v), value), Span::styled(l, label)])
    };

    let (done, rest) = progress_bar(kpis.biodiversity_index, 30);
    vec![
        row(format!("{:.1}M", kpis.hectares_restored as f64 / 1_000_000.0), "Hectares Restored"),
        row(format!("{:.1}K", kpis.carbon_sequestered as f64 / 1_000.0), "Tonnes CO₂ Sequestered"),
        row(kpis.projects_active.to_string(), "Active Projects"),
        row(kpis.communities_engaged.to_string(), "Communities Engaged"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Biodiversity Index  ", label),
            Span::styled(done, Style::default().fg(theme.success)),
            Span::styled(rest, Style::default().fg(theme.grey0)),
            Span::styled(format!(" {:.2}", kpis.biodiversity_index), value),
        ]),
    ]
}

fn timeline_lines(role: UserRole, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Restoration Timeline",
        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
    ))];

    for entry in timeline() {
        let mut spans = vec![
            Span::styled(format!("  {}  ", entry.date.format("%Y-%m-%d")), Style::default().fg(theme.muted)),
            Span::styled(entry.event, Style::default().fg(theme.fg0)),
            Span::styled(format!("  by {}", entry.user), Style::default().fg(theme.muted)),
            Span::styled(format!("  {}", entry.status), Style::default().fg(theme.success)),
        ];
        if entry.verified {
            spans.push(Span::styled("  ✓ Verified", Style::default().fg(theme.primary)));
        }
        if role.can_verify() {
            spans.push(Span::styled("  [ Review ]", Style::default().fg(theme.warning)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_kpis_are_compacted() {
        let all = text(&kpi_lines(&Theme::default()));
        assert!(all.contains("1.2M"));
        assert!(all.contains("15.6K"));
        assert!(all.contains("0.84"));
    }

    #[test]
    fn test_review_is_auditor_only() {
        let theme = Theme::default();
        let team = text(&timeline_lines(UserRole::Team, &theme));
        let auditor = text(&timeline_lines(UserRole::Auditor, &theme));

        assert!(!team.contains("Review"));
        assert_eq!(auditor.matches("Review").count(), timeline().len());
        assert_eq!(team.matches("Verified").count(), 3);
    }

    #[test]
    fn test_refresh_sensors_is_team_only() {
        let theme = Theme::default();
        assert!(text(&soil_lines(UserRole::Team, &theme)).contains("Refresh Sensors"));
        assert!(!text(&soil_lines(UserRole::Auditor, &theme)).contains("Refresh Sensors"));
    }
}
