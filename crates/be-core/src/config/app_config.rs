//! Application configuration domain model

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::brewery::WindowSpec;

/// Application configuration
///
/// Sizes default to the directory's page size and the reference window
/// geometry (W = 15, S = 5, five cards on screen).
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Paginated breweries endpoint, without query string
    pub base_url: String,

    /// Items requested per page (`per_page`)
    pub page_size: usize,

    /// Window size W
    pub block_size: usize,

    /// Window step S
    pub step: usize,

    /// Cards on screen at once
    pub viewport_rows: usize,

    /// Per-request timeout
    pub request_timeout_ms: u64,

    /// Extra attempts for timeouts and transport errors
    pub retry_attempts: u32,

    /// Delay between attempts
    pub retry_backoff_ms: u64,

    /// Optional directory for the rolling log file
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base_url must not be empty")]
    EmptyBaseUrl,

    #[error("{0} must be greater than zero")]
    ZeroSize(&'static str),

    #[error("step ({step}) must not exceed block_size ({block_size})")]
    StepExceedsBlock { step: usize, block_size: usize },

    #[error("viewport_rows ({viewport_rows}) must not exceed block_size ({block_size})")]
    ViewportExceedsBlock {
        viewport_rows: usize,
        block_size: usize,
    },
}

impl ExplorerConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openbrewerydb.org/v1/breweries";
    pub const DEFAULT_PAGE_SIZE: usize = 15;
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
    pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
    pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 250;

    /// Create ExplorerConfig from a TOML value.
    ///
    /// Missing keys fall back to [`ExplorerConfig::default`]. Values of the
    /// wrong type are treated as missing. No range checks happen here; call
    /// [`ExplorerConfig::validate`] afterwards.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let defaults = Self::default();
        let source = toml_value.get("source");
        let window = toml_value.get("window");

        let str_in = |section: Option<&toml::Value>, key: &str| {
            section
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let int_in = |section: Option<&toml::Value>, key: &str| {
            section
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .filter(|v| *v >= 0)
        };

        Self {
            base_url: str_in(source, "base_url").unwrap_or(defaults.base_url),
            page_size: int_in(source, "page_size")
                .map(|v| v as usize)
                .unwrap_or(defaults.page_size),
            request_timeout_ms: int_in(source, "request_timeout_ms")
                .map(|v| v as u64)
                .unwrap_or(defaults.request_timeout_ms),
            retry_attempts: int_in(source, "retry_attempts")
                .map(|v| v as u32)
                .unwrap_or(defaults.retry_attempts),
            retry_backoff_ms: int_in(source, "retry_backoff_ms")
                .map(|v| v as u64)
                .unwrap_or(defaults.retry_backoff_ms),
            block_size: int_in(window, "block_size")
                .map(|v| v as usize)
                .unwrap_or(defaults.block_size),
            step: int_in(window, "step")
                .map(|v| v as usize)
                .unwrap_or(defaults.step),
            viewport_rows: int_in(window, "viewport_rows")
                .map(|v| v as usize)
                .unwrap_or(defaults.viewport_rows),
            log_dir: str_in(toml_value.get("logging"), "dir")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        for (name, value) in [
            ("page_size", self.page_size),
            ("block_size", self.block_size),
            ("step", self.step),
            ("viewport_rows", self.viewport_rows),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroSize(name));
            }
        }
        if self.step > self.block_size {
            return Err(ConfigError::StepExceedsBlock {
                step: self.step,
                block_size: self.block_size,
            });
        }
        if self.viewport_rows > self.block_size {
            return Err(ConfigError::ViewportExceedsBlock {
                viewport_rows: self.viewport_rows,
                block_size: self.block_size,
            });
        }
        Ok(())
    }

    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec::new(self.block_size, self.step, self.viewport_rows)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
            block_size: WindowSpec::DEFAULT_BLOCK_SIZE,
            step: WindowSpec::DEFAULT_STEP,
            viewport_rows: WindowSpec::DEFAULT_VIEWPORT_ROWS,
            request_timeout_ms: Self::DEFAULT_REQUEST_TIMEOUT_MS,
            retry_attempts: Self::DEFAULT_RETRY_ATTEMPTS,
            retry_backoff_ms: Self::DEFAULT_RETRY_BACKOFF_MS,
            log_dir: None,
        }
    }
}
