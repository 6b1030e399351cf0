//! TUI footer: status line and keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Severity of the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Info(s) | Self::Success(s) | Self::Error(s) => s,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Render the footer panel.
pub fn render_footer(frame: &mut Frame, area: Rect, status: Option<&Status>) {
    let theme = ColorTheme::default();
    let status_line = match status {
        Some(Status::Info(s)) => Line::styled(s.clone(), theme.text_style()),
        Some(Status::Success(s)) => Line::styled(s.clone(), theme.success_style()),
        Some(Status::Error(s)) => Line::styled(s.clone(), theme.error_style()),
        None => Line::raw(""),
    };
    let key = Style::default().fg(Color::Yellow);
    let keys = Line::from(vec![
        Span::styled("Enter", key),
        Span::raw(": submit | "),
        Span::styled("Tab", key),
        Span::raw(": next field | "),
        Span::styled("\u{2190}/\u{2192}", key),
        Span::raw(": model | "),
        Span::styled("m", key),
        Span::raw(": mode | "),
        Span::styled("\u{2191}/\u{2193}", key),
        Span::raw(": logs | "),
        Span::styled("q", key),
        Span::raw(": quit"),
    ]);

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(vec![status_line, keys]).block(block), area);
}
