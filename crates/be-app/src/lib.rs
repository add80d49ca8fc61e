//! Brewery Explorer Application Layer
//!
//! This crate holds the windowed lazy-loading store: it accumulates pages
//! fetched through [`be_core::ports::BreweryPageSourcePort`], keeps a sliding
//! visible window over them and reconciles that window after deletions.

pub mod store;

pub use store::{
    Backfill, BreweryStore, PageLoad, RemovalOutcome, ScrollMove, StoreSnapshot, WindowAdvance,
};
