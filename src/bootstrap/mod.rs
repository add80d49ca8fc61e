pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, resolve_config_path};
pub use wiring::build_store;
