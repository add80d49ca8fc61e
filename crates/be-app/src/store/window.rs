//! Sliding window controller and on-screen viewport.

use be_core::ports::BreweryFetchError;
use be_core::Brewery;
use tracing::{debug, info};

use super::{BreweryStore, ScrollMove, WindowAdvance};

impl BreweryStore {
    /// Move the window start forward by one step.
    ///
    /// Looks one block ahead of the candidate start and fetches the next page
    /// first if the collection is too short and the directory is not
    /// exhausted. The window only moves when a full block is available past
    /// the candidate start; a short remainder is never shown mid-scroll.
    ///
    /// # Errors
    ///
    /// Returns the fetch error if the look-ahead request fails. The window
    /// does not move in that case.
    #[tracing::instrument(name = "store.advance_window", skip(self))]
    pub async fn advance_window(&self) -> Result<WindowAdvance, BreweryFetchError> {
        let (candidate, epoch, needs_fetch) = {
            let state = self.lock_state();
            let candidate = self.spec.advance_candidate(state.start_index);
            let needs_fetch =
                !self.spec.fits(candidate, state.items.len()) && state.cursor.has_more();
            debug!(
                from = state.start_index,
                to = candidate,
                available = state.items.len(),
                needs_fetch,
                "Window look-ahead"
            );
            (candidate, state.window_epoch, needs_fetch)
        };

        if needs_fetch {
            self.load_next_page().await?;
        }

        let mut state = self.lock_state();
        if state.window_epoch != epoch {
            debug!("Window moved while fetching, dropping advance");
            return Ok(WindowAdvance::Superseded);
        }

        let total = state.items.len();
        if !self.spec.fits(candidate, total) {
            let available = total.saturating_sub(candidate);
            return Ok(if state.cursor.has_more() {
                WindowAdvance::NotEnoughItems { available }
            } else {
                WindowAdvance::EndOfCollection { available }
            });
        }

        state.commit_window(candidate, &self.spec);
        state.window_epoch += 1;
        info!(start_index = candidate, total, "Window advanced");
        self.publish(&state);
        Ok(WindowAdvance::Advanced {
            start_index: candidate,
        })
    }

    /// Scroll the viewport back by one card.
    ///
    /// Only the scroll offset inside the materialized window changes; the
    /// window start never moves and nothing is fetched. Returns the new
    /// offset, never below zero.
    pub fn retreat_window(&self) -> usize {
        let mut state = self.lock_state();
        state.scroll_offset = state.scroll_offset.saturating_sub(1);
        self.publish(&state);
        state.scroll_offset
    }

    /// Scroll the viewport forward by one card.
    ///
    /// Moves inside the window while a full viewport still fits; at the end
    /// of the window it advances the window instead. After a successful
    /// advance the viewport lands on its last row so the previously visible
    /// cards stay in view.
    pub async fn scroll_forward(&self) -> Result<ScrollMove, BreweryFetchError> {
        {
            let mut state = self.lock_state();
            let next = state.scroll_offset + 1;
            if next <= self.spec.max_scroll_offset(state.visible.len()) {
                state.scroll_offset = next;
                self.publish(&state);
                return Ok(ScrollMove::Scrolled { scroll_offset: next });
            }
        }

        let advance = self.advance_window().await?;
        if let WindowAdvance::Advanced { .. } = advance {
            let mut state = self.lock_state();
            let last_row = self.spec.viewport_rows.saturating_sub(1);
            state.scroll_offset = last_row.min(self.spec.max_scroll_offset(state.visible.len()));
            self.publish(&state);
        }
        Ok(ScrollMove::Window(advance))
    }

    /// Cards currently on screen.
    pub fn viewport(&self) -> Vec<Brewery> {
        let state = self.lock_state();
        let start = state.scroll_offset.min(state.visible.len());
        let end = (start + self.spec.viewport_rows).min(state.visible.len());
        state.visible[start..end].to_vec()
    }
}
