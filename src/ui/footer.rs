//! Bottom bar: which slice of the feed is on screen, then as many key hints
//! as fit.

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key hints, most important first. Trailing ones are dropped on narrow
/// terminals.
const HINTS: &[&str] = &[
    "q: Quit",
    "h/←: Prev",
    "l/→: Next",
    "g: First",
    "G: Last",
    "r: Refresh",
    "1-9: Page",
    "j/k: Scroll",
];

const SEPARATOR: &str = " │ ";

pub struct Footer {
    offset: usize,
    shown: usize,
    total: usize,
}

impl Footer {
    /// `offset` is the index of the first article on the page, `shown` the
    /// number of articles drawn, `total` the feed's `articlesCount`.
    pub fn new(offset: usize, shown: usize, total: usize) -> Self {
        Self {
            offset,
            shown,
            total,
        }
    }

    /// One-based range of the visible articles, e.g. `articles 21-40 of 95`.
    pub fn range_label(&self) -> String {
        if self.shown == 0 {
            return format!("no articles at offset {} of {}", self.offset, self.total);
        }
        format!(
            "articles {}-{} of {}",
            self.offset.saturating_add(1),
            self.offset.saturating_add(self.shown),
            self.total
        )
    }

    /// Hints that fit in `room` columns after the range label.
    fn hints_for(room: usize) -> Vec<&'static str> {
        let mut used = 0;
        HINTS
            .iter()
            .copied()
            .take_while(|hint| {
                let width = Span::raw(*hint).width() + SEPARATOR.chars().count();
                used += width;
                used <= room
            })
            .collect()
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let label = format!(" {}", self.range_label());
        // Borders take two columns.
        let room = (width as usize)
            .saturating_sub(2)
            .saturating_sub(Span::raw(label.as_str()).width());

        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let hint_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(label, Style::default().fg(HEADER_TEXT))];
        for hint in Self::hints_for(room) {
            spans.push(Span::styled(SEPARATOR, separator_style));
            spans.push(Span::styled(hint, hint_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
