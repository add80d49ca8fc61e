//! # Configuration Data
//!
//! Configuration DTO plus its TOML mapping. File reading lives in the
//! binary's bootstrap layer; this module never touches the filesystem.

mod app_config;

pub use app_config::{ConfigError, ExplorerConfig};
