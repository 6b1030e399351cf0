//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::form::Mode;
use crate::styles::ColorTheme;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Spinner glyph for a tick counter.
#[must_use]
pub fn spinner_glyph(tick: u64) -> char {
    // Index is < 4, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// Render the header panel.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    greeting: Option<&str>,
    mode: Mode,
    loading: Option<u64>,
) {
    let theme = ColorTheme::default();
    let mut spans = vec![
        Span::styled("FuelBud", theme.header_style()),
        Span::raw(format!(" | Mode: {}", mode.label())),
    ];
    if let Some(greeting) = greeting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(greeting.to_string(), theme.accent_style()));
    }
    if let Some(tick) = loading {
        spans.push(Span::styled(
            format!(" | {} Calculating...", spinner_glyph(tick)),
            theme.warning_style(),
        ));
    }

    let block = Block::default().borders(Borders::BOTTOM).title(" FuelBud ");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
