use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use regenera_core::content::{
    FOOTER_COLUMNS, HERO, JOIN_OPTIONS, LANGUAGES, LAYERS, MISSION, PODS, SOCIAL_LINKS,
};
use regenera_core::interaction::DisplayMode;
use regenera_core::motion::Region;

use super::{wrap_text, ImpactWidget};
use crate::app::App;
use crate::screens::{LandingSection, LandingView};
use crate::theme::Theme;

/// Landing page content laid out as one tall column of lines
struct Page {
    width: usize,
    lines: Vec<Line<'static>>,
    sections: Vec<(LandingSection, Region)>,
    open: Option<(LandingSection, u32)>,
}

impl Page {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            sections: Vec::new(),
            open: None,
        }
    }

    fn begin(&mut self, section: LandingSection) {
        self.close();
        self.open = Some((section, self.lines.len() as u32));
    }

    fn close(&mut self) {
        if let Some((section, top)) = self.open.take() {
            let height = self.lines.len() as u32 - top;
            self.sections.push((section, Region::new(top, height)));
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn heading(&mut self, plain: &str, highlight: &str, color: Color, theme: &Theme) {
        self.push(
            Line::from(vec![
                Span::styled(plain.to_string(), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled(highlight.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
            .centered(),
        );
        self.blank();
    }

    /// Wrapped paragraph, optionally indented
    fn text(&mut self, text: &str, indent: usize, style: Style) {
        let pad = " ".repeat(indent);
        for line in wrap_text(text, self.width.saturating_sub(indent)) {
            self.push(Line::from(Span::styled(format!("{}{}", pad, line), style)));
        }
    }

    fn centered(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width) {
            self.push(Line::from(Span::styled(line, style)).centered());
        }
    }

    fn finish(mut self) -> (Vec<Line<'static>>, Vec<(LandingSection, Region)>) {
        self.close();
        (self.lines, self.sections)
    }
}

pub struct LandingWidget;

impl LandingWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let width = area.width.saturating_sub(4).max(20) as usize;
        let Some(view) = app.landing() else {
            return;
        };
        let (lines, sections) = Self::build(view, width, &app.theme, app.display_mode);

        let content_height = lines.len().min(u16::MAX as usize) as u16;
        let Some(view) = app.landing_mut() else {
            return;
        };
        view.set_layout(sections, content_height, area.height);
        let scroll = view.scroll;

        let inner = Rect::new(area.x + 2, area.y, area.width.saturating_sub(4), area.height);
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(app.theme.bg0)),
            area,
        );
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(app.theme.bg0).fg(app.theme.fg1))
                .scroll((scroll, 0)),
            inner,
        );
    }

    fn build(
        view: &LandingView,
        width: usize,
        theme: &Theme,
        mode: DisplayMode,
    ) -> (Vec<Line<'static>>, Vec<(LandingSection, Region)>) {
        let mut page = Page::new(width);
        let current = view.current_section();

        for section in LandingSection::ALL {
            page.begin(section);
            match section {
                LandingSection::Hero => hero(&mut page, theme),
                LandingSection::Mission => mission(&mut page, theme),
                LandingSection::Pods => pods(&mut page, theme, view),
                LandingSection::Layers => layers(&mut page, theme, view, current == section),
                LandingSection::Impact => {
                    for line in ImpactWidget::lines(&view.impact, width, theme) {
                        page.push(line);
                    }
                }
                LandingSection::Join => join(&mut page, theme, view, current == section),
                LandingSection::Footer => footer(&mut page, theme, mode),
            }
            page.blank();
            page.blank();
        }

        page.finish()
    }
}

fn hero(page: &mut Page, theme: &Theme) {
    page.blank();
    page.blank();
    page.centered(HERO.tagline, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
    page.blank();
    page.centered(HERO.headline[0], Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD));
    page.centered(HERO.headline[1], Style::default().fg(theme.primary).add_modifier(Modifier::BOLD));
    page.blank();
    page.centered(HERO.subtitle, Style::default().fg(theme.muted));
    page.blank();
    page.push(
        Line::from(vec![
            Span::styled(format!(" {} ", HERO.actions[0]), Style::default().fg(theme.bg0).bg(theme.primary)),
            Span::raw("   "),
            Span::styled(format!(" {} ", HERO.actions[1]), Style::default().fg(theme.primary)),
        ])
        .centered(),
    );
    page.blank();
    page.centered("Enter: join the movement · j/k: scroll · ?: keys", Style::default().fg(theme.grey0));
}

fn mission(page: &mut Page, theme: &Theme) {
    page.heading("Our Living ", "Manifesto", theme.consciousness, theme);
    for paragraph in MISSION.paragraphs {
        page.text(paragraph, 0, Style::default().fg(theme.fg1));
        page.blank();
    }
    page.centered(MISSION.quote, Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC));
    page.centered(&format!("- {}", MISSION.attribution), Style::default().fg(theme.muted));
    page.blank();
    page.centered(&format!("[ {} ]", MISSION.action), Style::default().fg(theme.primary));
}

fn pods(page: &mut Page, theme: &Theme, view: &LandingView) {
    page.heading("Innovation ", "Pods", theme.innovation, theme);
    page.centered(
        "Living laboratories where multi-consciousness collaboration births breakthrough solutions",
        Style::default().fg(theme.muted),
    );
    page.blank();

    for pod in PODS {
        let hovered = view.pods.is_active(&pod.id);
        let color = theme.accent_color(pod.accent);
        let marker = if hovered { "▶ " } else { "  " };
        let title_style = if hovered {
            Style::default().fg(color).bg(theme.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };

        page.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(pod.title, title_style),
            Span::styled(format!("  [{}]", pod.status.label()), Style::default().fg(theme.warning)),
            Span::styled(format!("  {}", pod.domain), Style::default().fg(theme.muted)),
        ]));
        page.text(pod.description, 4, Style::default().fg(theme.fg1));
        if hovered {
            page.text(pod.details, 4, Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC));
            page.push(Line::from(Span::styled(
                "    [ Learn More ]  [ Join Pod ]",
                Style::default().fg(theme.accent),
            )));
        }
        page.push(Line::from(Span::styled(
            format!("    Impact: {}", pod.impact),
            Style::default().fg(theme.success),
        )));
        page.blank();
    }
}

fn layers(page: &mut Page, theme: &Theme, view: &LandingView, focused: bool) {
    page.heading("Multi-Consciousness ", "Collaboration", theme.consciousness, theme);

    for (index, layer) in LAYERS.iter().enumerate() {
        let expanded = view.layers.is_active(&layer.id);
        let color = theme.accent_color(layer.accent);
        let cursor = focused && index == view.layer_cursor;
        let marker = match (cursor, expanded) {
            (true, true) => "▼ ",
            (true, false) => "▶ ",
            (false, true) => "▽ ",
            (false, false) => "▷ ",
        };
        let title_style = if cursor {
            Style::default().fg(color).bg(theme.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };

        page.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::styled(layer.title, title_style),
        ]));
        page.text(layer.description, 4, Style::default().fg(theme.fg1));
        if expanded {
            page.text(layer.details, 4, Style::default().fg(theme.muted));
            for example in layer.examples {
                page.push(Line::from(vec![
                    Span::styled("      • ", Style::default().fg(color)),
                    Span::styled(example, Style::default().fg(theme.fg1)),
                ]));
            }
        }
        page.blank();
    }

    page.centered(
        "When human, AI and biological intelligence work together, solutions emerge that none could reach alone.",
        Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC),
    );
}

fn join(page: &mut Page, theme: &Theme, view: &LandingView, focused: bool) {
    page.heading("Join the ", "Movement", theme.consciousness, theme);

    for (index, option) in JOIN_OPTIONS.iter().enumerate() {
        let selected = view.join.is_active(&option.id);
        let color = theme.accent_color(option.accent);
        let cursor = focused && index == view.join_cursor;
        let marker = if cursor { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default().fg(theme.bg0).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };

        page.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(option.title, title_style),
            Span::styled(format!("  {}", option.badge), Style::default().fg(theme.muted)),
        ]));
        page.text(option.description, 4, Style::default().fg(theme.fg1));
        let benefits = option.benefits.join(" · ");
        page.text(&benefits, 4, Style::default().fg(theme.muted));
        if selected {
            page.push(Line::from(Span::styled(
                format!("    [ {} ]  (f: fill in the form)", option.cta),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
        page.blank();
    }

    page.centered(
        "Ready to co-create? Press f to connect with our AI matchmaker.",
        Style::default().fg(theme.primary),
    );
}

fn footer(page: &mut Page, theme: &Theme, mode: DisplayMode) {
    page.push(Line::from(Span::styled(
        "─".repeat(page.width),
        Style::default().fg(theme.grey0),
    )));
    page.push(Line::from(Span::styled(
        "Aeon Regenera",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )));
    page.text(
        "Pioneering a multi-consciousness innovation commons to heal Earth and extend human potential.",
        0,
        Style::default().fg(theme.muted),
    );
    page.blank();

    for column in FOOTER_COLUMNS {
        page.push(Line::from(vec![
            Span::styled(format!("{:<12}", column.title), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
            Span::styled(column.links.join(" · "), Style::default().fg(theme.muted)),
        ]));
    }
    page.blank();
    page.push(Line::from(vec![
        Span::styled(format!("{:<12}", "Follow"), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
        Span::styled(SOCIAL_LINKS.join(" · "), Style::default().fg(theme.muted)),
    ]));
    page.push(Line::from(vec![
        Span::styled(format!("{:<12}", "Language"), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
        Span::styled(LANGUAGES.join(" · "), Style::default().fg(theme.muted)),
    ]));
    page.push(Line::from(vec![
        Span::styled(format!("{:<12}", "Mode"), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} (m to switch)", mode.label()), Style::default().fg(theme.accent)),
    ]));
    page.blank();
    page.push(
        Line::from(Span::styled(
            "© 2025 Aeon Regenera. Built with regenerative consciousness.",
            Style::default().fg(theme.grey0),
        ))
        .centered(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use regenera_core::MotionConfig;
    use tokio::sync::mpsc;

    #[test]
    fn test_sections_tile_the_page() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let view = LandingView::new(&MotionConfig::default(), 1, tx);
        let (lines, sections) =
            LandingWidget::build(&view, 80, &Theme::default(), DisplayMode::Human);

        assert_eq!(sections.len(), LandingSection::ALL.len());
        let mut next_top = 0;
        for (_, region) in &sections {
            assert_eq!(region.top, next_top);
            assert!(region.height > 0);
            next_top = region.bottom();
        }
        assert_eq!(next_top as usize, lines.len());
    }

    #[test]
    fn test_expanded_layer_adds_examples() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = LandingView::new(&MotionConfig::default(), 1, tx);
        let theme = Theme::default();
        let (collapsed, _) = LandingWidget::build(&view, 80, &theme, DisplayMode::Human);

        view.layers.toggle(LAYERS[0].id);
        let (expanded, _) = LandingWidget::build(&view, 80, &theme, DisplayMode::Human);
        assert!(expanded.len() >= collapsed.len() + LAYERS[0].examples.len());
    }
}
