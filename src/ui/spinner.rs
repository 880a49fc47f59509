use crate::ui::theme::ACCENT;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Placeholder shown instead of joke text while a request is in flight.
pub struct LoadingSpinner {
    tick: usize,
}

impl LoadingSpinner {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(ACCENT)),
            Span::raw(" Loading..."),
        ])
    }
}
