//! Port interfaces for the application layer
//!
//! Ports define the contract between the store (application logic) and
//! infrastructure implementations. The store only ever talks to the remote
//! directory through these traits, so it can be exercised against fakes.

pub mod errors;
mod page_source;


pub use errors::BreweryFetchError;
pub use page_source::BreweryPageSourcePort;
