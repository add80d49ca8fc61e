//! Values the store hands back to consumers.

use be_core::ports::BreweryFetchError;
use be_core::Brewery;

/// Read-only view of the store, published after every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub visible: Vec<Brewery>,
    pub start_index: usize,
    pub scroll_offset: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub current_page: u32,
    pub total_loaded: usize,
}

/// Result of a successful page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// The page had items. `appended` excludes duplicates and removed ids.
    Appended { received: usize, appended: usize },
    /// The page was empty; the directory is exhausted.
    Exhausted,
    /// The store was reset while the request was in flight; the response
    /// was dropped.
    Discarded,
}

/// Result of a forward window gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAdvance {
    Advanced { start_index: usize },
    /// The directory is exhausted and fewer than a full block of items
    /// remain past the candidate start.
    EndOfCollection { available: usize },
    /// More pages may exist but the fetched items still do not fill a full
    /// block. Another gesture will fetch again.
    NotEnoughItems { available: usize },
    /// Another window commit landed while this gesture was waiting on the
    /// network.
    Superseded,
}

/// Result of a single scroll-forward gesture on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMove {
    /// Moved inside the materialized window.
    Scrolled { scroll_offset: usize },
    /// Reached the end of the window and asked it to advance.
    Window(WindowAdvance),
}

/// What happened to the backfill a removal may trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backfill {
    /// The window was already full, or the directory is exhausted.
    NotNeeded,
    Loaded(PageLoad),
    /// The backfill request failed; the removal was committed with a short
    /// window.
    Failed(BreweryFetchError),
    /// A newer window commit landed during the backfill; the removal was
    /// applied to the collection but the window stayed where the newer
    /// commit put it. After a store reset nothing is applied and `removed`
    /// is zero.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// Items actually dropped from the collection.
    pub removed: usize,
    pub start_index: usize,
    pub backfill: Backfill,
}
