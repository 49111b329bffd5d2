use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ui::theme::MUTED_TEXT;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated loading indicator; `frame` advances once per tick.
pub struct LoadingSpinner {
    frame: usize,
}

impl LoadingSpinner {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let glyph = FRAMES[self.frame % FRAMES.len()];
        Paragraph::new(Line::from(format!("{glyph} Loading articles...")))
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center)
    }
}
