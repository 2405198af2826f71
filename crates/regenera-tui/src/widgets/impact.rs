use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use regenera_core::content::ImpactMetric;
use regenera_core::motion::Metric;

use super::{progress_bar, wrap_text};
use crate::theme::Theme;

const INTRO: &str = "Real-time metrics showing the regenerative impact of our multi-consciousness \
                     innovation pods. Every number represents life restored, communities \
                     empowered, and futures made possible.";
const CLOSING_QUOTE: &str = "\"Every metric represents countless lives touched, ecosystems \
                             healed, and possibilities unlocked.\"";

/// Planetary impact section: six counters with progress bars
pub struct ImpactWidget;

impl ImpactWidget {
    pub fn lines(metrics: &[Metric], width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Planetary ", Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled("Impact", Style::default().fg(theme.innovation).add_modifier(Modifier::BOLD)),
            ])
            .centered(),
            Line::from(""),
        ];
        for text in wrap_text(INTRO, width) {
            lines.push(Line::from(Span::styled(text, Style::default().fg(theme.muted))).centered());
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.success)),
                Span::styled("ACTIVE: ", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
                Span::styled("12 pods regenerating across 6 continents", Style::default().fg(theme.fg1)),
            ])
            .centered(),
        );
        lines.push(Line::from(""));

        let bar_width = width.saturating_sub(12).clamp(10, 48);
        for metric in metrics {
            lines.extend(Self::metric_lines(metric, bar_width, theme));
            lines.push(Line::from(""));
        }

        for text in wrap_text(CLOSING_QUOTE, width) {
            lines.push(
                Line::from(Span::styled(
                    text,
                    Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC),
                ))
                .centered(),
            );
        }
        lines
    }

    fn metric_lines(metric: &Metric, bar_width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let info = ImpactMetric::find(&metric.id);
        let color = info
            .map(|info| theme.accent_color(info.accent))
            .unwrap_or(theme.primary);
        let label = info.map(|info| info.label).unwrap_or(metric.id.as_str()).to_string();
        let description = info.map(|info| info.description).unwrap_or_default();
        let percent = metric.percent();
        let (done, rest) = progress_bar(percent / 100.0, bar_width);

        vec![
            Line::from(vec![
                Span::styled(
                    format!("  {:>7}", metric.display_value()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", metric.unit), Style::default().fg(theme.muted)),
                Span::styled(format!("   {}", label), Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled("  LIVE", Style::default().fg(theme.success)),
            ]),
            Line::from(Span::styled(format!("  {}", description), Style::default().fg(theme.muted))),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(done, Style::default().fg(color)),
                Span::styled(rest, Style::default().fg(theme.grey0)),
                Span::styled(format!(" {:>3}%", percent.round() as u32), Style::default().fg(theme.muted)),
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regenera_core::content::impact_metrics;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_metric_shows_compact_value_and_percent() {
        let mut metric = impact_metrics().remove(0);
        metric.current = 600_000.0;
        let lines = ImpactWidget::metric_lines(&metric, 20, &Theme::default());

        assert!(text(&lines[0]).contains("600K acres"));
        assert!(text(&lines[0]).contains("LIVE"));
        assert!(text(&lines[2]).ends_with(" 50%"));
    }

    #[test]
    fn test_section_lists_every_metric() {
        let metrics = impact_metrics();
        let lines = ImpactWidget::lines(&metrics, 60, &Theme::default());
        let all: Vec<String> = lines.iter().map(text).collect();
        assert!(all.iter().any(|l| l.contains("ACTIVE: 12 pods")));
        assert_eq!(all.iter().filter(|l| l.contains("LIVE")).count(), metrics.len());
    }
}
