//! Compact summary of one article.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::Article;
use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct ArticlePreview<'a> {
    article: &'a Article,
}

impl<'a> ArticlePreview<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self { article }
    }

    /// Identity key of the preview.
    pub fn key(&self) -> &'a str {
        &self.article.slug
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let article = self.article;
        let heart = if article.favorited { "♥" } else { "♡" };

        let meta = Line::from(vec![
            Span::styled(
                article.author.username.as_str(),
                Style::default().fg(ACCENT_GREEN),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(article.created_date(), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("  {} {}", heart, article.favorites_count),
                Style::default().fg(ACCENT_GREEN),
            ),
        ]);

        let title = Line::from(Span::styled(
            article.title.as_str(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));

        let description = Line::from(Span::styled(
            article.description.as_str(),
            Style::default().fg(MUTED_TEXT),
        ));

        let mut footer = vec![Span::styled(
            "Read more...",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )];
        for tag in &article.tag_list {
            footer.push(Span::raw(" "));
            footer.push(Span::styled(
                format!("#{tag}"),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        vec![
            meta,
            title,
            description,
            Line::from(footer),
            Line::from(Span::styled(
                "─".repeat(width as usize),
                Style::default().fg(GLOBAL_BORDER),
            )),
        ]
    }
}
