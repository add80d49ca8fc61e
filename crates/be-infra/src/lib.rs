//! # be-infra
//!
//! Adapters that implement the be-core ports against real infrastructure.

pub mod http;

pub use http::OpenBreweryDbClient;
