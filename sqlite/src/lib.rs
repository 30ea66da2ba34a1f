//! Read-only access to stylx style libraries.
//!
//! A `.stylx` file is a SQLite database. This crate opens one without ever
//! writing to it, lists its catalog, and extracts the rows of its `Items`
//! table as [`Item`](stylx_core::Item) records.
//!
//! # Modules
//!
//! - **`database`**: [`StyleDatabase`], the read-only handle
//! - **`query`**: [`ItemQuery`] and the lazy [`ItemIter`]
//! - **`convert`**: row to item reshaping (tags splitting, content decoding)
//! - **`schema`**: the fixed SQL and catalog introspection
//!
//! # Quick start
//!
//! ```no_run
//! use stylx_sqlite::StyleDatabase;
//!
//! let db = StyleDatabase::open("Basic.stylx").unwrap();
//! let items = db.read_items().unwrap();
//! db.close().unwrap();
//!
//! println!("{}", serde_json::to_string_pretty(&items).unwrap());
//! ```

mod convert;
mod database;
mod error;
mod query;
mod schema;

pub use database::StyleDatabase;
pub use error::{Result, StylxError};
pub use query::{ItemIter, ItemQuery};
