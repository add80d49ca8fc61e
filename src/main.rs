use brewery_explorer::bootstrap::{self, config::CONFIG_PATH_ENV};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = bootstrap::resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok());
    let config = bootstrap::resolve_config(&config_path)?;

    bootstrap::tracing::init_tracing_subscriber(config.log_dir.as_deref())?;
    info!(path = %config_path.display(), "Configuration loaded");

    let store = bootstrap::build_store(&config)?;

    if let Err(err) = store.initialize().await {
        error!(error = %err, "Failed to load the first page");
        return Err(err.into());
    }

    let snapshot = store.snapshot();
    info!(
        total = snapshot.total_loaded,
        has_more = snapshot.has_more,
        "Directory session ready"
    );
    for (row, brewery) in store.viewport().iter().enumerate() {
        info!(
            row,
            id = %brewery.id,
            name = %brewery.name,
            city = %brewery.city,
            state = %brewery.state,
            brewery_type = %brewery.brewery_type,
            "Viewport"
        );
    }

    Ok(())
}
