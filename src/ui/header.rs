use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: brand, current route, page position and fetch activity.
pub struct Header<'a> {
    route: &'a str,
    page: usize,
    total_pages: usize,
    validating: bool,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a str, page: usize, total_pages: usize, validating: bool) -> Self {
        Self {
            route,
            page,
            total_pages,
            validating,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default()
            .fg(ACCENT_GREEN)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("conduit", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("page {} of {}", self.page + 1, self.total_pages.max(1)),
                text_style,
            ),
        ];
        if self.validating {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("refreshing", Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
