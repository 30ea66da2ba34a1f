//! Core types for dumping stylx style libraries.
//!
//! - [`Item`] is one normalized record of a style file's `Items` table, and
//!   [`TableInfo`] one entry of its catalog.
//! - [`FileMap`] collects per-file results in input order.
//! - [`DumpConfig`] and [`OutputFormat`] control a dump run; [`format_items`]
//!   and [`format_tables`] render the results.
//! - [`select_inputs`] and [`relative_to`] pick input files and render the
//!   output keys.
//!
//! # Example
//!
//! ```
//! use stylx_core::*;
//!
//! let mut files = FileMap::new();
//! files.insert(
//!     "basic.stylx".to_string(),
//!     vec![Item {
//!         id: "1".into(),
//!         class: "3".into(),
//!         category: None,
//!         name: "Circle".into(),
//!         tags: None,
//!         content: serde_json::json!({}),
//!     }],
//! );
//!
//! let json = format_items(&files, OutputFormat::Json).unwrap();
//! assert!(json.contains("\"basic.stylx\""));
//! ```

mod config;
mod file_map;
mod output;
mod paths;
mod types;

pub use config::{ConfigError, DEFAULT_EXTENSION, DumpConfig};
pub use file_map::FileMap;
pub use output::{OutputFormat, format_items, format_tables};
pub use paths::{has_extension, normalize, relative_to, select_inputs};
pub use types::{Item, TableInfo, TableKind};
