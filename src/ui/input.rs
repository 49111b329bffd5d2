use crate::ui::app::App;
use crate::ui::pager::PagerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

const PAGE_SCROLL: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown => app.scroll_by(PAGE_SCROLL),
        KeyCode::PageUp => app.scroll_by(-PAGE_SCROLL),
        KeyCode::Char('r') => app.refresh(),
        _ => {
            if let Some(intent) = pager_key(app, key.code) {
                app.dispatch_pager(intent);
            }
        }
    }
}

/// Keyboard equivalents of the pagination controls. Only controls that
/// are currently drawn can be triggered, except that an empty page still
/// accepts first/previous so there is a way back.
fn pager_key(app: &App, code: KeyCode) -> Option<PagerIntent> {
    let info = app.page_info();
    if !app.pager_visible() {
        if !app.list_empty() {
            return None;
        }
        return match code {
            KeyCode::Home | KeyCode::Char('g') => Some(PagerIntent::First),
            KeyCode::Left | KeyCode::Char('h') if info.has_previous_page => {
                Some(PagerIntent::Previous)
            }
            _ => None,
        };
    }
    match code {
        KeyCode::Home | KeyCode::Char('g') => Some(PagerIntent::First),
        KeyCode::End | KeyCode::Char('G') => Some(PagerIntent::Last),
        KeyCode::Left | KeyCode::Char('h') if info.has_previous_page => {
            Some(PagerIntent::Previous)
        }
        KeyCode::Right | KeyCode::Char('l') if info.has_next_page => Some(PagerIntent::Next),
        KeyCode::Char(digit @ '1'..='9') => {
            let slot = digit as usize - '1' as usize;
            info.pages
                .get(slot)
                .map(|&page| PagerIntent::Goto { page })
        }
        _ => None,
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(intent) = app.pager_hit(mouse.column, mouse.row) {
                app.dispatch_pager(intent);
            }
        }
        MouseEventKind::ScrollDown => app.scroll_by(1),
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
