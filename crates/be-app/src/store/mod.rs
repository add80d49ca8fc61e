//! Windowed lazy-loading brewery store.
//!
//! The store is split by responsibility:
//!
//! - `accumulator` - page loading into the collection, reset and retry
//! - `window` - sliding window advance and the on-screen viewport
//! - `reconcile` - removals and the backfill they may trigger
//!
//! ## Concurrency
//!
//! State sits behind a `std::sync::Mutex` that is never held across an
//! `.await`, so observers and `retreat_window` never wait on the network.
//! Operations that await (`advance_window`, the removal backfill) capture the
//! window epoch first and refuse to commit if a newer window commit landed
//! in the meantime. Forward gestures are still expected to be serialized by
//! the caller.

mod accumulator;
mod outcome;
mod reconcile;
mod state;
mod window;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use be_core::ports::BreweryPageSourcePort;
use be_core::{ExplorerConfig, WindowSpec};
use tokio::sync::watch;

pub use outcome::{Backfill, PageLoad, RemovalOutcome, ScrollMove, StoreSnapshot, WindowAdvance};

use state::StoreState;

/// Session-scoped store over the remote brewery directory.
///
/// Construct one per session and share it by reference (or `Arc`); there is
/// no global instance.
pub struct BreweryStore {
    source: Arc<dyn BreweryPageSourcePort>,
    spec: WindowSpec,
    state: Mutex<StoreState>,
    snapshots: watch::Sender<StoreSnapshot>,
}

impl BreweryStore {
    pub fn new(source: Arc<dyn BreweryPageSourcePort>, spec: WindowSpec) -> Self {
        let state = StoreState::new();
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            source,
            spec,
            state: Mutex::new(state),
            snapshots,
        }
    }

    pub fn from_config(source: Arc<dyn BreweryPageSourcePort>, config: &ExplorerConfig) -> Self {
        Self::new(source, config.window_spec())
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    /// Current state as seen by consumers.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock_state().snapshot()
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshots.subscribe()
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        // Transitions never panic midway, so a poisoned guard still holds
        // consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &StoreState) {
        self.snapshots.send_replace(state.snapshot());
    }
}
