//! Core data model: datasets, rows, and cell values

mod dataset;
mod input;
mod row;
mod value;

pub use dataset::{Dataset, DEFAULT_DELIMITER};
pub use input::DataInput;
pub use row::Row;
pub use value::CellValue;
