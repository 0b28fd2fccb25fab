//! txtdata - In-memory tabular datasets with delimited text persistence
//!
//! A [`Dataset`] is an ordered sequence of rows sharing one schema. Rows can
//! arrive as a single mapping, a sequence of mappings, or a columnar mapping
//! (field to equal-length value sequences); whatever the shape, the store
//! keeps every row rectangular by null-padding missing fields and
//! retroactively backfilling new ones. Datasets round-trip through a
//! header-first delimited text format (`;` by default).
//!
//! ```
//! use txtdata::{row, Dataset};
//!
//! let mut orders = Dataset::new();
//! orders.insert(row! { "item" => "bolt", "qty" => 40 })?;
//! orders.insert(row! { "item" => "nut", "qty" => 12, "batch" => "B1" })?;
//!
//! assert_eq!(orders.fields(), vec!["item", "qty", "batch"]);
//! let nuts = orders.filter([("item", "nut")]);
//! assert_eq!(nuts.len(), 1);
//! # Ok::<(), txtdata::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod file;
pub mod model;

pub use error::{Error, Result};
pub use model::{CellValue, DataInput, Dataset, Row, DEFAULT_DELIMITER};
