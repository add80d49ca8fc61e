use async_trait::async_trait;

use crate::brewery::Brewery;
use crate::ports::errors::BreweryFetchError;

/// Port for fetching fixed-size pages of the brewery directory.
///
/// # Behavior
/// - Pages are 1-based.
/// - An empty page means the directory is exhausted.
/// - Implementations must not retain state between calls that would change
///   the result of a later call for the same page.
#[async_trait]
pub trait BreweryPageSourcePort: Send + Sync {
    /// Fetch page `page` of the directory.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Brewery>, BreweryFetchError>;
}
