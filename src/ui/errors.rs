use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::api::FetchError;
use crate::ui::theme::STATUS_ERROR;

/// Renders a fetch error as a bulleted `key message` list.
pub struct ListErrors<'a> {
    error: &'a FetchError,
}

impl<'a> ListErrors<'a> {
    pub fn new(error: &'a FetchError) -> Self {
        Self { error }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let style = Style::default().fg(STATUS_ERROR);
        self.error
            .error_list()
            .into_iter()
            .map(|(key, message)| Line::from(Span::styled(format!("• {key} {message}"), style)))
            .collect()
    }
}
