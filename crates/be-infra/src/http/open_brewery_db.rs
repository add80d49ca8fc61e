use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use be_core::ports::{BreweryFetchError, BreweryPageSourcePort};
use be_core::{Brewery, ExplorerConfig};
use tokio::time::sleep;
use tracing::{debug, error, warn};

type FetchResult<T> = Result<T, BreweryFetchError>;

/// Page source backed by the Open Brewery DB list endpoint.
///
/// Requests `GET <base_url>?per_page=<page_size>&page=<n>` and decodes the
/// JSON array body. Timeouts and transport failures are retried with a
/// linearly growing backoff; status and decode failures are returned as is.
pub struct OpenBreweryDbClient {
    client: reqwest::Client,
    base_url: String,
    page_size: usize,
    timeout: Duration,
    retry_attempts: u32,
    retry_backoff: Duration,
}

impl OpenBreweryDbClient {
    pub fn new(config: &ExplorerConfig) -> FetchResult<Self> {
        let timeout = config.request_timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BreweryFetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('?').to_string(),
            page_size: config.page_size,
            timeout,
            retry_attempts: config.retry_attempts,
            retry_backoff: config.retry_backoff(),
        })
    }

    async fn request_page(&self, page: u32) -> FetchResult<Vec<Brewery>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("per_page", self.page_size.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreweryFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| BreweryFetchError::Decode(e.to_string()))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> BreweryFetchError {
        if error.is_timeout() {
            BreweryFetchError::Timeout(self.timeout.as_millis() as u64)
        } else if let Some(status) = error.status() {
            BreweryFetchError::Status(status.as_u16())
        } else {
            BreweryFetchError::Network(error.to_string())
        }
    }

    async fn retry<F, Fut, T>(&self, page: u32, mut action: F) -> FetchResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match action().await {
                Ok(val) => return Ok(val),
                Err(err) => {
                    if attempt == self.retry_attempts || !err.is_retryable() {
                        error!(page, attempts = attempt + 1, error = %err, "Page request failed");
                        return Err(err);
                    }
                    let backoff = self.retry_backoff * (attempt + 1);
                    warn!(
                        page,
                        attempt = attempt + 1,
                        error = %err,
                        ?backoff,
                        "Page request failed, retrying"
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[async_trait]
impl BreweryPageSourcePort for OpenBreweryDbClient {
    #[tracing::instrument(name = "infra.fetch_page", skip(self), fields(per_page = self.page_size))]
    async fn fetch_page(&self, page: u32) -> FetchResult<Vec<Brewery>> {
        let items = self.retry(page, || self.request_page(page)).await?;
        debug!(page, count = items.len(), "Fetched brewery page");
        Ok(items)
    }
}
