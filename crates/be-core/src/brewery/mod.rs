//! Brewery directory domain: the record type, the remote page cursor and
//! the pure window arithmetic shared by the store.

mod cursor;
mod model;
mod window;

pub use cursor::PageCursor;
pub use model::Brewery;
pub use window::WindowSpec;
