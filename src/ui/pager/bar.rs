//! Pagination row: `<< < 1 2 [3] 4 5 > >>`.
//!
//! Cell geometry is a pure function of the area and the page info so mouse
//! hit-testing can recompute exactly what was drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::feed::PageInfo;
use crate::ui::pager::PagerIntent;
use crate::ui::theme::{ACCENT_GREEN, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

const CELL_GAP: u16 = 1;

/// One clickable control in the pagination row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerCell {
    pub area: Rect,
    pub label: String,
    pub intent: PagerIntent,
    pub active: bool,
}

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Lay out the controls for `info` inside `area`. First and last are
/// always present, previous/next only when available. Cells that do not
/// fit are dropped.
pub fn pager_cells(area: Rect, info: &PageInfo) -> Vec<PagerCell> {
    let row = frame_block().inner(area);
    if row.width == 0 || row.height == 0 {
        return Vec::new();
    }

    let mut controls = vec![("<<".to_string(), PagerIntent::First, false)];
    if info.has_previous_page {
        controls.push(("<".to_string(), PagerIntent::Previous, false));
    }
    for &page in &info.pages {
        controls.push((
            (page + 1).to_string(),
            PagerIntent::Goto { page },
            page == info.current_page,
        ));
    }
    if info.has_next_page {
        controls.push((">".to_string(), PagerIntent::Next, false));
    }
    controls.push((">>".to_string(), PagerIntent::Last, false));

    let right = row.x + row.width;
    let mut x = row.x;
    let mut cells = Vec::with_capacity(controls.len());
    for (label, intent, active) in controls {
        let width = label.chars().count() as u16 + 2;
        if x + width > right {
            break;
        }
        cells.push(PagerCell {
            area: Rect {
                x,
                y: row.y,
                width,
                height: 1,
            },
            label,
            intent,
            active,
        });
        x += width + CELL_GAP;
    }
    cells
}

pub struct PagerBar<'a> {
    info: &'a PageInfo,
}

impl<'a> PagerBar<'a> {
    pub fn new(info: &'a PageInfo) -> Self {
        Self { info }
    }
}

impl Widget for PagerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = pager_cells(area, self.info);
        frame_block().render(area, buf);

        let normal = Style::default().fg(HEADER_TEXT);
        let active = Style::default()
            .fg(ACCENT_GREEN)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        for cell in cells {
            let style = if cell.active { active } else { normal };
            buf.set_string(
                cell.area.x,
                cell.area.y,
                format!(" {} ", cell.label),
                style,
            );
        }
    }
}
