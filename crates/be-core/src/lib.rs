//! # be-core
//!
//! Core domain models and port interfaces for Brewery Explorer.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod brewery;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use brewery::{Brewery, PageCursor, WindowSpec};
pub use config::ExplorerConfig;
pub use ids::BreweryId;
