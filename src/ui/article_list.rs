//! Article list: picks one of four views from the current fetch snapshot
//! and draws it, followed by pagination controls when populated.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::{Article, FetchError, FetchSnapshot};
use crate::feed::PageInfo;
use crate::ui::errors::ListErrors;
use crate::ui::pager::PagerBar;
use crate::ui::preview::ArticlePreview;
use crate::ui::spinner::LoadingSpinner;
use crate::ui::theme::MUTED_TEXT;

pub const EMPTY_MESSAGE: &str = "No articles are here... yet.";

const PAGER_HEIGHT: u16 = 2;

/// What the list shows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    Error(&'a FetchError),
    Loading,
    Empty,
    Populated(&'a [Article]),
}

/// Resolve the view for this render.
///
/// An error always wins. Once mounted, missing data means loading. The
/// articles shown are the fetched page if there is one, otherwise the seed
/// articles; the two are never merged. Without either, the list is
/// populated with nothing.
pub fn resolve_view<'a>(
    snapshot: &'a FetchSnapshot,
    initial: Option<&'a [Article]>,
    mounted: bool,
) -> ListView<'a> {
    if let Some(error) = &snapshot.error {
        return ListView::Error(error);
    }
    if mounted && snapshot.data.is_none() {
        return ListView::Loading;
    }

    let articles = snapshot
        .data
        .as_deref()
        .map(|page| page.articles.as_slice())
        .or(initial);

    match articles {
        Some([]) => ListView::Empty,
        Some(articles) => ListView::Populated(articles),
        None => ListView::Populated(&[]),
    }
}

/// One rendered preview and the slug it is keyed by.
pub struct PreviewEntry<'a> {
    pub key: &'a str,
    pub lines: Vec<Line<'a>>,
}

pub fn preview_entries(articles: &[Article], width: u16) -> Vec<PreviewEntry<'_>> {
    articles
        .iter()
        .map(|article| {
            let preview = ArticlePreview::new(article);
            PreviewEntry {
                key: preview.key(),
                lines: preview.lines(width),
            }
        })
        .collect()
}

/// Split the list body into the scrolling previews and the pager row.
pub fn list_areas(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(PAGER_HEIGHT)])
        .split(body);
    (chunks[0], chunks[1])
}

pub struct ArticleListProps<'a> {
    pub view: ListView<'a>,
    pub page_info: &'a PageInfo,
    pub spinner_frame: usize,
    pub scroll: u16,
}

pub fn draw_article_list(frame: &mut Frame<'_>, area: Rect, props: &ArticleListProps<'_>) {
    match props.view {
        ListView::Error(error) => {
            let widget = Paragraph::new(ListErrors::new(error).lines()).wrap(Wrap { trim: false });
            frame.render_widget(widget, area);
        }
        ListView::Loading => {
            let spinner = LoadingSpinner::new(props.spinner_frame);
            frame.render_widget(spinner.widget(), area);
        }
        ListView::Empty => {
            let widget = Paragraph::new(Line::from(EMPTY_MESSAGE))
                .style(Style::default().fg(MUTED_TEXT));
            frame.render_widget(widget, area);
        }
        ListView::Populated(articles) => {
            let (list_area, pager_area) = list_areas(area);
            let lines: Vec<Line<'_>> = preview_entries(articles, list_area.width)
                .into_iter()
                .flat_map(|entry| entry.lines)
                .collect();
            let widget = Paragraph::new(lines).scroll((props.scroll, 0));
            frame.render_widget(widget, list_area);
            frame.render_widget(PagerBar::new(props.page_info), pager_area);
        }
    }
}
