use crate::api::{Article, ArticlesResponse, FetchCache, FetchError, FetchSnapshot};
use crate::config::Config;
use crate::feed::{feed_url, paginate, PageContext, PageCountContext, PageInfo, Route, Viewport, PAGE_SIZE};
use crate::ui::article_list::{list_areas, resolve_view, ListView};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::pager::{pager_cells, PagerIntent, PagerReducer, PagerState};
use ratatui::layout::{Position, Rect};

/// Owner of the feed view: provides the page and page-count context to the
/// article list, holds route state and the fetch cache, and routes input.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    cell_width: u16,
    api_base: String,
    route: Route,
    page: PageContext,
    page_count: PageCountContext,
    cache: FetchCache,
    initial_articles: Option<Vec<Article>>,
    /// False until the first frame has been drawn.
    mounted: bool,
    spinner_frame: usize,
    scroll: u16,
}

impl App {
    pub fn new(config: &Config, route: Route, cache: FetchCache, page: PageContext) -> Self {
        Self {
            should_quit: false,
            size: None,
            cell_width: config.ui.cell_width,
            api_base: config.api.base_url.clone(),
            route,
            page,
            page_count: PageCountContext::default(),
            cache,
            initial_articles: None,
            mounted: false,
            spinner_frame: 0,
            scroll: 0,
        }
    }

    /// Seed the list with articles to show until the first fetch resolves.
    pub fn with_seed(mut self, seed: ArticlesResponse) -> Self {
        self.page_count.set_page_count(seed.articles_count);
        self.initial_articles = Some(seed.articles);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page_context(&self) -> &PageContext {
        &self.page
    }

    pub fn page_count_context(&self) -> &PageCountContext {
        &self.page_count
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    pub fn initial_articles(&self) -> Option<&[Article]> {
        self.initial_articles.as_deref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mark_mounted(&mut self) {
        if !self.mounted {
            tracing::debug!("article list mounted");
            self.mounted = true;
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// URL of the current page of the current route.
    pub fn fetch_url(&self) -> Result<String, FetchError> {
        feed_url(&self.api_base, &self.route, self.page.page())
    }

    /// Read the current page through the cache, starting a request when
    /// the cache decides one is needed.
    pub fn fetch_snapshot(&self) -> FetchSnapshot {
        match self.fetch_url() {
            Ok(url) => self.cache.use_fetch(&url),
            Err(err) => FetchSnapshot::failed(err),
        }
    }

    pub fn viewport(&self) -> Viewport {
        let columns = self.size.map(|(cols, _)| cols).unwrap_or(0);
        Viewport::from_columns(columns, self.cell_width)
    }

    pub fn page_info(&self) -> PageInfo {
        paginate(
            self.page_count.page_count(),
            PAGE_SIZE,
            self.viewport().page_window(),
            self.page.page(),
        )
    }

    /// True when the list is populated and therefore shows the pager.
    pub fn pager_visible(&self) -> bool {
        let snapshot = self.fetch_snapshot();
        matches!(
            resolve_view(&snapshot, self.initial_articles(), self.mounted),
            ListView::Populated(_)
        )
    }

    /// True when the current page resolved to no articles, e.g. after
    /// jumping past the final page.
    pub fn list_empty(&self) -> bool {
        let snapshot = self.fetch_snapshot();
        resolve_view(&snapshot, self.initial_articles(), self.mounted) == ListView::Empty
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// A request settled. When it is the page on screen, publish its total
    /// to the page-count context.
    pub fn on_fetch_settled(&mut self, url: &str) {
        let Ok(current) = self.fetch_url() else {
            return;
        };
        if current != url {
            return;
        }
        if let Some(data) = self.cache.peek(url).data {
            self.page_count.set_page_count(data.articles_count);
        }
    }

    /// Run a pagination handler and write the result into the page context.
    pub fn dispatch_pager(&mut self, intent: PagerIntent) {
        let state = PagerState {
            page: self.page.page(),
            page_count: self.page_count.page_count(),
        };
        let next = PagerReducer::reduce(state, intent);
        if next.page != state.page {
            self.page.set_page(next.page);
            self.scroll = 0;
        }
    }

    /// Re-fetch the current page, keeping what is shown until it settles.
    pub fn refresh(&self) {
        match self.fetch_url() {
            Ok(url) => self.cache.revalidate(&url),
            Err(err) => tracing::warn!(error = %err, "refresh skipped"),
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32);
        self.scroll = next as u16;
    }

    /// Screen area of the pagination row for the current terminal size.
    pub fn pager_area(&self) -> Option<Rect> {
        let (cols, rows) = self.size?;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        Some(list_areas(body).1)
    }

    /// Pagination control under the given screen cell, if any.
    pub fn pager_hit(&self, column: u16, row: u16) -> Option<PagerIntent> {
        if !self.pager_visible() {
            return None;
        }
        let area = self.pager_area()?;
        pager_cells(area, &self.page_info())
            .into_iter()
            .find(|cell| cell.area.contains(Position::new(column, row)))
            .map(|cell| cell.intent)
    }
}
