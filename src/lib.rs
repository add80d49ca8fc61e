//! # brewery-explorer
//!
//! Bootstrap for a brewery explorer session: configuration loading, tracing
//! setup and wiring of the HTTP page source into the windowed store.

pub mod bootstrap;
