//! SQLite persistence
//!
//! Resolves the on-disk store location, bootstraps the schema, seeds the
//! sample words and serves random fetches and score inserts.

mod path;
mod store;

pub mod samples;

pub use path::{DB_FILE_NAME, resolve_db_path};
pub use store::GameStore;
