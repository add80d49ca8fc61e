#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use be_app::BreweryStore;
use be_core::ports::{BreweryFetchError, BreweryPageSourcePort};
use be_core::{Brewery, BreweryId, WindowSpec};
use tokio::sync::Notify;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn brewery(id: &str) -> Brewery {
    Brewery::new(id, format!("Brewery {id}"), "micro", "Bend", "Oregon")
}

/// `n` breweries with ids `"{prefix}-0"` .. `"{prefix}-{n-1}"`.
pub fn page(prefix: &str, n: usize) -> Vec<Brewery> {
    (0..n).map(|i| brewery(&format!("{prefix}-{i}"))).collect()
}

pub fn ids_of(items: &[Brewery]) -> Vec<String> {
    items.iter().map(|b| b.id.to_string()).collect()
}

pub fn id_set(ids: &[&str]) -> HashSet<BreweryId> {
    ids.iter().map(|id| BreweryId::from(*id)).collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Fake: scripted page source
// ---------------------------------------------------------------------------

/// Page source answering from a per-page script.
///
/// Each page holds a queue of responses; the last one repeats. Unscripted
/// pages answer with an empty page.
#[derive(Default)]
pub struct ScriptedPageSource {
    script: Mutex<HashMap<u32, VecDeque<Result<Vec<Brewery>, BreweryFetchError>>>>,
    calls: Mutex<Vec<u32>>,
}

impl ScriptedPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, items: Vec<Brewery>) -> Self {
        self.push(page, Ok(items));
        self
    }

    pub fn with_failure(self, page: u32, err: BreweryFetchError) -> Self {
        self.push(page, Err(err));
        self
    }

    pub fn push(&self, page: u32, response: Result<Vec<Brewery>, BreweryFetchError>) {
        self.script
            .lock()
            .unwrap()
            .entry(page)
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BreweryPageSourcePort for ScriptedPageSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Brewery>, BreweryFetchError> {
        self.calls.lock().unwrap().push(page);
        let mut script = self.script.lock().unwrap();
        match script.get_mut(&page) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| Ok(Vec::new())),
            None => Ok(Vec::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// Fake: gated page source
// ---------------------------------------------------------------------------

/// Wraps a scripted source and holds the first request for each gated page
/// until the test releases it. Later requests for the same page pass through.
pub struct GatedPageSource {
    inner: ScriptedPageSource,
    gated: Mutex<HashSet<u32>>,
    pub started: Notify,
    pub release: Notify,
}

impl GatedPageSource {
    pub fn new(inner: ScriptedPageSource, gated_pages: &[u32]) -> Self {
        Self {
            inner,
            gated: Mutex::new(gated_pages.iter().copied().collect()),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn calls(&self) -> Vec<u32> {
        self.inner.calls()
    }
}

#[async_trait]
impl BreweryPageSourcePort for GatedPageSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Brewery>, BreweryFetchError> {
        let gated = self.gated.lock().unwrap().remove(&page);
        if gated {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.inner.fetch_page(page).await
    }
}

// ---------------------------------------------------------------------------
// Store helpers
// ---------------------------------------------------------------------------

pub fn store_over<S>(source: Arc<S>) -> BreweryStore
where
    S: BreweryPageSourcePort + 'static,
{
    init_tracing();
    BreweryStore::new(source, WindowSpec::default())
}

/// Window bounds invariant: the committed window always lies inside the
/// collection.
pub fn assert_window_in_bounds(store: &BreweryStore) {
    let snapshot = store.snapshot();
    assert!(
        snapshot.start_index + snapshot.visible.len() <= snapshot.total_loaded,
        "window {}+{} exceeds collection of {}",
        snapshot.start_index,
        snapshot.visible.len(),
        snapshot.total_loaded
    );
}
