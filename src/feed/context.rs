//! Shared page state, handed down from the view's owner to every reader.

use std::sync::Arc;

use parking_lot::RwLock;

/// Current zero-based page plus its setter. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    page: Arc<RwLock<usize>>,
}

impl PageContext {
    pub fn new(page: usize) -> Self {
        Self {
            page: Arc::new(RwLock::new(page)),
        }
    }

    pub fn page(&self) -> usize {
        *self.page.read()
    }

    pub fn set_page(&self, page: usize) {
        let mut current = self.page.write();
        if *current != page {
            tracing::debug!(from = *current, to = page, "page changed");
            *current = page;
        }
    }
}

/// Total number of items available for pagination. Written by the owner
/// of the view, read by the article list.
#[derive(Debug, Clone, Default)]
pub struct PageCountContext {
    count: Arc<RwLock<usize>>,
}

impl PageCountContext {
    pub fn new(count: usize) -> Self {
        Self {
            count: Arc::new(RwLock::new(count)),
        }
    }

    pub fn page_count(&self) -> usize {
        *self.count.read()
    }

    pub fn set_page_count(&self, count: usize) {
        *self.count.write() = count;
    }
}
