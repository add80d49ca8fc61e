//! ID type wrappers for type safety.

mod brewery_id;
mod id_macro;

pub use brewery_id::BreweryId;
