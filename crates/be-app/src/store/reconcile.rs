//! Deletion reconciler.

use std::collections::HashSet;

use be_core::BreweryId;
use tracing::{debug, info, warn};

use super::{Backfill, BreweryStore, PageLoad, RemovalOutcome};

impl BreweryStore {
    /// Remove `ids` from the collection and re-place the window.
    ///
    /// The removal is local only. The window start is pulled back so it
    /// never points past the end of the shrunken collection. When the
    /// resulting window is short and the directory may have more, the next
    /// page is fetched first and the removal, the new window and its start
    /// are committed together afterwards; until then the previous window
    /// stays visible. Otherwise everything commits immediately.
    ///
    /// Removed ids are remembered for the rest of the session and never
    /// appended again. A backfill failure does not undo the removal: it is
    /// committed with the short window and the error is recorded. A reset
    /// that lands during the backfill drops the removal altogether.
    #[tracing::instrument(name = "store.remove_items", skip(self, ids), fields(count = ids.len()))]
    pub async fn remove_items(&self, ids: &HashSet<BreweryId>) -> RemovalOutcome {
        let spec = self.spec;

        let (removed, start_index, epoch, generation) = {
            let mut state = self.lock_state();
            let remaining = state.remaining_len(ids);
            let removed = state.items.len() - remaining;
            let start_index = spec.clamp_start(state.start_index, remaining);
            let window_len = remaining.saturating_sub(start_index).min(spec.block_size);

            state.tombstones.extend(ids.iter().cloned());
            state.window_epoch += 1;

            if !spec.is_short(window_len) || !state.cursor.has_more() {
                state.drop_items(ids);
                state.commit_window(start_index, &spec);
                state.scroll_offset = 0;
                info!(removed, start_index, remaining, "Removed breweries");
                self.publish(&state);
                return RemovalOutcome {
                    removed,
                    start_index,
                    backfill: Backfill::NotNeeded,
                };
            }

            debug!(
                removed,
                window_len, "Window short after removal, backfilling"
            );
            (removed, start_index, state.window_epoch, state.reset_generation)
        };

        let load = self.load_next_page().await;

        let mut state = self.lock_state();
        if state.reset_generation != generation || matches!(load, Ok(PageLoad::Discarded)) {
            // The session was reset; the removal belonged to the old one.
            warn!(removed, "Store reset during removal backfill, dropping removal");
            return RemovalOutcome {
                removed: 0,
                start_index: state.start_index,
                backfill: Backfill::Superseded,
            };
        }
        state.drop_items(ids);

        if state.window_epoch != epoch {
            // A newer commit owns the window; only refresh it in place so the
            // removed items disappear from view.
            let current = spec.clamp_start(state.start_index, state.items.len());
            state.commit_window(current, &spec);
            warn!(
                removed,
                start_index = current,
                "Window moved during removal backfill, keeping newer placement"
            );
            self.publish(&state);
            return RemovalOutcome {
                removed,
                start_index: current,
                backfill: Backfill::Superseded,
            };
        }

        state.commit_window(start_index, &spec);
        state.scroll_offset = 0;
        state.window_epoch += 1;
        info!(
            removed,
            start_index,
            total = state.items.len(),
            "Removed breweries after backfill"
        );
        self.publish(&state);

        RemovalOutcome {
            removed,
            start_index,
            backfill: match load {
                Ok(page) => Backfill::Loaded(page),
                Err(err) => Backfill::Failed(err),
            },
        }
    }
}
