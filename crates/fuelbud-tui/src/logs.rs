//! Scrollable activity log.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

const MAX_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub text: String,
}

/// Bounded log with a scroll position that follows new entries until the
/// user scrolls up.
#[derive(Debug, Clone)]
pub struct LogPane {
    entries: Vec<LogEntry>,
    /// First visible entry.
    pub offset: usize,
    pub auto_scroll: bool,
}

impl LogPane {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            offset: 0,
            auto_scroll: true,
        }
    }

    pub fn push(&mut self, level: LogLevel, text: impl Into<String>) {
        self.entries.push(LogEntry {
            level,
            text: text.into(),
        });
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
            self.offset = self.offset.saturating_sub(1);
        }
        if self.auto_scroll {
            self.offset = self.last_index();
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(LogLevel::Info, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(LogLevel::Warn, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(LogLevel::Error, text);
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn scroll_up(&mut self) {
        self.page_up(1);
    }

    pub fn scroll_down(&mut self) {
        self.page_down(1);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        self.offset = (self.offset + page_size).min(self.last_index());
        if self.offset >= self.last_index() {
            self.auto_scroll = true;
        }
    }
}

impl Default for LogPane {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the log panel.
///
/// When following, the newest entries fill the panel; otherwise the view
/// starts at the scroll offset.
pub fn render_logs(frame: &mut Frame, area: Rect, pane: &LogPane) {
    let theme = ColorTheme::default();
    let visible = area.height.saturating_sub(2) as usize;
    let total = pane.len();
    let start = if pane.auto_scroll {
        total.saturating_sub(visible)
    } else {
        pane.offset
    };

    let items: Vec<ListItem> = pane
        .entries()
        .iter()
        .skip(start)
        .take(visible)
        .map(|entry| {
            let style = match entry.level {
                LogLevel::Info => Style::default(),
                LogLevel::Warn => theme.warning_style(),
                LogLevel::Error => Style::default().fg(theme.error),
            };
            ListItem::new(Line::raw(entry.text.as_str())).style(style)
        })
        .collect();

    let title = if total > visible && !pane.auto_scroll {
        let pct = (pane.offset * 100) / total.saturating_sub(1).max(1);
        format!(" Log ({pct}%) ")
    } else {
        " Log ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
