//! HTTP page sources.

mod open_brewery_db;

pub use open_brewery_db::OpenBreweryDbClient;
