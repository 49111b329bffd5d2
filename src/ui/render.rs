use crate::feed::PAGE_SIZE;
use crate::ui::app::App;
use crate::ui::article_list::{draw_article_list, resolve_view, ArticleListProps, ListView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let snapshot = app.fetch_snapshot();
    let page_info = app.page_info();
    let route = app.route().as_path();

    let header_widget = Header::new(
        &route,
        page_info.current_page,
        page_info.total_pages,
        snapshot.is_validating,
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let view = resolve_view(&snapshot, app.initial_articles(), app.is_mounted());
    let shown = match view {
        ListView::Populated(articles) => articles.len(),
        _ => 0,
    };
    let props = ArticleListProps {
        view,
        page_info: &page_info,
        spinner_frame: app.spinner_frame(),
        scroll: app.scroll(),
    };
    draw_article_list(frame, body, &props);

    let footer_widget = Footer::new(
        page_info.current_page.saturating_mul(PAGE_SIZE),
        shown,
        app.page_count_context().page_count(),
    );
    frame.render_widget(footer_widget.widget(footer.width), footer);
}
