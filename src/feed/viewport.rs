//! Viewport width and the pagination breakpoint.

/// Widths at or above this many layout units get the wide page window.
pub const WIDE_BREAKPOINT: u32 = 768;
const WIDE_WINDOW: usize = 10;
const NARROW_WINDOW: usize = 5;

/// Width of the visible area in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Viewport of a terminal `columns` wide, each column `cell_width` units.
    pub fn from_columns(columns: u16, cell_width: u16) -> Self {
        Self::new(columns as u32 * cell_width as u32)
    }

    /// Number of page buttons the pagination control shows.
    pub fn page_window(&self) -> usize {
        if self.width >= WIDE_BREAKPOINT {
            WIDE_WINDOW
        } else {
            NARROW_WINDOW
        }
    }
}
