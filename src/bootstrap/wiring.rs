//! # Dependency wiring
//!
//! The only place that knows both the HTTP adapter and the store. It
//! assembles them and makes no other decisions.

use std::sync::Arc;

use anyhow::Context;
use be_app::BreweryStore;
use be_core::ports::BreweryPageSourcePort;
use be_core::ExplorerConfig;
use be_infra::OpenBreweryDbClient;
use tracing::info;

/// Build a session store backed by the Open Brewery DB client.
///
/// # Errors
///
/// Returns error if the config is out of range or the HTTP client cannot be
/// built.
pub fn build_store(config: &ExplorerConfig) -> anyhow::Result<Arc<BreweryStore>> {
    config.validate().context("Invalid configuration")?;

    let source: Arc<dyn BreweryPageSourcePort> = Arc::new(
        OpenBreweryDbClient::new(config).context("Failed to build brewery page source")?,
    );
    info!(
        base_url = %config.base_url,
        page_size = config.page_size,
        block_size = config.block_size,
        step = config.step,
        "Wired brewery store"
    );

    Ok(Arc::new(BreweryStore::from_config(source, config)))
}
