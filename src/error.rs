//! Error types for dataset construction, mutation, and persistence

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by dataset operations and the text persistence layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Columnar input whose value sequences disagree in length.
    #[error(
        "column {first:?} has length {first_len} while column {field:?} has length {len}"
    )]
    Shape {
        /// First field of the columnar mapping (its length is authoritative).
        first: String,
        /// Length of the first field's sequence.
        first_len: usize,
        /// Offending field.
        field: String,
        /// Length of the offending field's sequence.
        len: usize,
    },

    /// A delete predicate named a field outside the current schema.
    #[error("field {0:?} not in dataset fields")]
    UnknownField(String),

    /// Persistence paths must carry a `.txt` extension.
    #[error("path suffix must be .txt: {}", .0.display())]
    InvalidExtension(PathBuf),

    /// Encoding needs at least one row to derive a header from.
    #[error("cannot encode an empty dataset")]
    EmptyDataset,

    /// Underlying file I/O failure, surfaced verbatim.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
