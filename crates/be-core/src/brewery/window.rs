//! Sliding window arithmetic.
//!
//! Pure functions only. The store owns the state and decides when to call
//! these; nothing here touches the collection itself.

/// Geometry of the visible window.
///
/// * `block_size` - number of items in a full window (W); also the minimum
///   number of trailing items required before the window may advance.
/// * `step` - how far the window start moves per forward gesture (S).
/// * `viewport_rows` - how many cards of the window are on screen at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub block_size: usize,
    pub step: usize,
    pub viewport_rows: usize,
}

impl WindowSpec {
    pub const DEFAULT_BLOCK_SIZE: usize = 15;
    pub const DEFAULT_STEP: usize = 5;
    pub const DEFAULT_VIEWPORT_ROWS: usize = 5;

    pub fn new(block_size: usize, step: usize, viewport_rows: usize) -> Self {
        Self {
            block_size,
            step,
            viewport_rows,
        }
    }

    /// Slice `items[start..start + block_size]`, truncated at the end.
    pub fn materialize<'a, T>(&self, items: &'a [T], start: usize) -> &'a [T] {
        let start = start.min(items.len());
        let end = start.saturating_add(self.block_size).min(items.len());
        &items[start..end]
    }

    /// Start offset the next forward gesture aims for.
    pub fn advance_candidate(&self, start: usize) -> usize {
        start.saturating_add(self.step)
    }

    /// Whether a full window starting at `start` fits into `len` items.
    pub fn fits(&self, start: usize, len: usize) -> bool {
        start.saturating_add(self.block_size) <= len
    }

    /// Pull `start` back so the window never points past the end of a
    /// collection of `len` items.
    pub fn clamp_start(&self, start: usize, len: usize) -> usize {
        start.min(len.saturating_sub(self.block_size))
    }

    pub fn is_short(&self, window_len: usize) -> bool {
        window_len < self.block_size
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll_offset(&self, window_len: usize) -> usize {
        window_len.saturating_sub(self.viewport_rows)
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BLOCK_SIZE,
            Self::DEFAULT_STEP,
            Self::DEFAULT_VIEWPORT_ROWS,
        )
    }
}
