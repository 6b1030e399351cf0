//! Result panels: animated prediction metrics and the comparison table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use fuelbud_core::animator::ValueAnimator;
use fuelbud_core::comparison::{format_dollars, Choice};
use fuelbud_core::constants::metric_names;
use fuelbud_orchestration::report::ComparisonReport;

use crate::styles::ColorTheme;

/// Render the animated prediction metrics.
///
/// Values come from the animator, so they read zero until a target is set.
pub fn render_prediction(frame: &mut Frame, area: Rect, title: &str, animator: &ValueAnimator) {
    let theme = ColorTheme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let metric = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), theme.muted_style()),
            Span::styled(value, theme.text_style().add_modifier(Modifier::BOLD)),
        ])
    };
    let lines = vec![
        metric(
            "Predicted MPG",
            format!("{:.2}", animator.value(metric_names::PREDICTED_MPG)),
        ),
        metric(
            "Base MPG",
            format!("{:.2}", animator.value(metric_names::BASE_MPG)),
        ),
        metric(
            "Fuel Cost",
            format_dollars(animator.value(metric_names::FUEL_COST)),
        ),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let progress = animator.frame().progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(progress);
    frame.render_widget(gauge, chunks[1]);
}

/// Render a comparison: both options, the savings, and the recommendation.
pub fn render_comparison(frame: &mut Frame, area: Rect, report: &ComparisonReport) {
    let theme = ColorTheme::default();
    let result = &report.result;
    let mut lines = vec![Line::from(Span::styled(
        format!("  {:<16} {:>8} {:>10}", "Model", "MPG", "Trip cost"),
        theme.muted_style(),
    ))];
    for choice in [Choice::A, Choice::B] {
        let option = result.option(choice);
        let cheaper = choice == result.cheaper;
        let style = if cheaper {
            theme.cheaper_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::styled(
            format!(
                "{} {:<16} {:>8.2} {:>10}",
                if cheaper { "*" } else { " " },
                option.display_name,
                option.efficiency,
                format_dollars(option.cost)
            ),
            style,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Savings: ", theme.muted_style()),
        Span::styled(format_dollars(result.savings), theme.success_style()),
    ]));
    lines.push(Line::styled(
        report.recommendation().to_string(),
        Style::default().fg(Color::White),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Comparison ")
        .border_style(theme.border_style());
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Placeholder shown before the first result.
pub fn render_placeholder(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let text = Line::styled("Fill the form and press Enter.", theme.muted_style());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}
