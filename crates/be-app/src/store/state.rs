//! Mutable store state and the synchronous transitions applied to it.
//!
//! Everything here runs under the store mutex; nothing in this module awaits.

use std::collections::HashSet;

use be_core::{Brewery, BreweryId, PageCursor, WindowSpec};

use super::outcome::StoreSnapshot;

#[derive(Debug)]
pub(crate) struct StoreState {
    /// Every item fetched so far, in arrival order.
    pub items: Vec<Brewery>,
    /// Ids currently present in `items`.
    pub known_ids: HashSet<BreweryId>,
    /// Ids removed during this session; never appended again.
    pub tombstones: HashSet<BreweryId>,
    pub cursor: PageCursor,
    pub start_index: usize,
    /// Last committed window. May lag `items` while a removal backfill is
    /// in flight.
    pub visible: Vec<Brewery>,
    pub scroll_offset: usize,
    pub in_flight: usize,
    pub error: Option<String>,
    /// Page whose last load failed, for `retry`.
    pub failed_page: Option<u32>,
    /// Bumped on every window commit and every removal.
    pub window_epoch: u64,
    /// Bumped on every reset; loads started before a reset are discarded.
    pub reset_generation: u64,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            known_ids: HashSet::new(),
            tombstones: HashSet::new(),
            cursor: PageCursor::new(),
            start_index: 0,
            visible: Vec::new(),
            scroll_offset: 0,
            in_flight: 0,
            error: None,
            failed_page: None,
            window_epoch: 0,
            reset_generation: 0,
        }
    }

    /// Drop everything and start a fresh session.
    pub fn reset(&mut self) {
        let window_epoch = self.window_epoch + 1;
        let reset_generation = self.reset_generation + 1;
        *self = Self {
            window_epoch,
            reset_generation,
            ..Self::new()
        };
    }

    /// Append a non-empty page, skipping ids already present or tombstoned
    /// (first write wins). Returns the number of items actually appended.
    ///
    /// The first page to land in an empty collection also materializes the
    /// window at offset zero.
    pub fn append_page(&mut self, page: Vec<Brewery>, spec: &WindowSpec) -> usize {
        let was_empty = self.items.is_empty();
        let before = self.items.len();

        for brewery in page {
            if self.tombstones.contains(&brewery.id) || !self.known_ids.insert(brewery.id.clone())
            {
                continue;
            }
            self.items.push(brewery);
        }

        if was_empty && !self.items.is_empty() {
            self.start_index = 0;
            self.visible = spec.materialize(&self.items, 0).to_vec();
        }

        self.items.len() - before
    }

    /// Number of items that would remain after removing `ids`.
    pub fn remaining_len(&self, ids: &HashSet<BreweryId>) -> usize {
        self.items.iter().filter(|b| !ids.contains(&b.id)).count()
    }

    pub fn drop_items(&mut self, ids: &HashSet<BreweryId>) {
        self.items.retain(|b| !ids.contains(&b.id));
        self.known_ids.retain(|id| !ids.contains(id));
    }

    /// Rebuild the visible window at `start` and move the window there.
    pub fn commit_window(&mut self, start: usize, spec: &WindowSpec) {
        self.start_index = start;
        self.visible = spec.materialize(&self.items, start).to_vec();
        self.scroll_offset = self
            .scroll_offset
            .min(spec.max_scroll_offset(self.visible.len()));
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            visible: self.visible.clone(),
            start_index: self.start_index,
            scroll_offset: self.scroll_offset,
            loading: self.in_flight > 0,
            error: self.error.clone(),
            has_more: self.cursor.has_more(),
            current_page: self.cursor.current_page(),
            total_loaded: self.items.len(),
        }
    }
}
