/// Remote pagination cursor.
///
/// `current_page` is the last page that produced items; `has_more` latches to
/// `false` once the directory returns an empty page and only a fresh cursor
/// clears it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current_page: u32,
    has_more: bool,
}

impl PageCursor {
    pub const FIRST_PAGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            current_page: Self::FIRST_PAGE,
            has_more: true,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1)
    }

    /// Record that `page` returned at least one item.
    pub fn record_page(&mut self, page: u32) {
        self.current_page = page;
        self.has_more = true;
    }

    /// Record that the directory returned an empty page.
    pub fn mark_exhausted(&mut self) {
        self.has_more = false;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}
