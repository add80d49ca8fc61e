//! Collection accumulation: page loads, reset and retry.
//!
//! `load_page` is the only path that touches `loading`/`error`.

use be_core::ports::BreweryFetchError;
use be_core::PageCursor;
use tracing::{debug, info, warn};

use super::{BreweryStore, PageLoad};

impl BreweryStore {
    /// Fresh top-level reset followed by a load of the first page.
    ///
    /// Clears the collection, the removal tombstones, the window and the
    /// exhaustion latch. Responses of requests started before the reset are
    /// dropped when they arrive.
    #[tracing::instrument(name = "store.initialize", skip(self))]
    pub async fn initialize(&self) -> Result<PageLoad, BreweryFetchError> {
        {
            let mut state = self.lock_state();
            state.reset();
            self.publish(&state);
        }
        self.load_page(PageCursor::FIRST_PAGE).await
    }

    /// Fetch `page` and append its items to the collection.
    ///
    /// - Non-empty page: items are appended (duplicates skipped), the cursor
    ///   moves to `page` and `has_more` is set.
    /// - Empty page: `has_more` latches to `false`.
    /// - Failure: the error message is recorded and the collection is left
    ///   untouched; the error is also returned.
    ///
    /// The first page to land in an empty collection materializes the
    /// window at offset zero. Later pages never move the window.
    #[tracing::instrument(name = "store.load_page", skip(self))]
    pub async fn load_page(&self, page: u32) -> Result<PageLoad, BreweryFetchError> {
        let generation = {
            let mut state = self.lock_state();
            state.in_flight += 1;
            state.error = None;
            self.publish(&state);
            state.reset_generation
        };

        let result = self.source.fetch_page(page).await;

        let mut state = self.lock_state();
        if state.reset_generation != generation {
            warn!(page, "Dropping page response from before store reset");
            return Ok(PageLoad::Discarded);
        }
        state.in_flight = state.in_flight.saturating_sub(1);

        let outcome = match result {
            Ok(items) if items.is_empty() => {
                state.cursor.mark_exhausted();
                state.failed_page = None;
                info!(page, total = state.items.len(), "Directory exhausted");
                Ok(PageLoad::Exhausted)
            }
            Ok(items) => {
                let received = items.len();
                let appended = state.append_page(items, &self.spec);
                state.cursor.record_page(page);
                state.failed_page = None;
                if appended < received {
                    debug!(
                        page,
                        skipped = received - appended,
                        "Skipped duplicate or removed breweries"
                    );
                }
                info!(
                    page,
                    received,
                    appended,
                    total = state.items.len(),
                    "Loaded brewery page"
                );
                Ok(PageLoad::Appended { received, appended })
            }
            Err(err) => {
                warn!(page, error = %err, "Failed to load brewery page");
                state.error = Some(err.to_string());
                state.failed_page = Some(page);
                Err(err)
            }
        };

        self.publish(&state);
        outcome
    }

    /// Load the page after the cursor's current page.
    pub async fn load_next_page(&self) -> Result<PageLoad, BreweryFetchError> {
        let next = self.lock_state().cursor.next_page();
        debug!(page = next, "Loading next page");
        self.load_page(next).await
    }

    /// Re-run the load that failed last, if any.
    pub async fn retry(&self) -> Option<Result<PageLoad, BreweryFetchError>> {
        let failed_page = self.lock_state().failed_page;
        match failed_page {
            Some(page) => Some(self.load_page(page).await),
            None => None,
        }
    }
}
