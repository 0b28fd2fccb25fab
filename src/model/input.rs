//! Input shapes accepted by dataset construction and insertion

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::row::Row;
use super::value::CellValue;

/// The three accepted input shapes, resolved at the API boundary.
///
/// A single mapping becomes one row; a sequence of mappings becomes one row
/// per element; a columnar mapping (field to equal-length value sequences)
/// is transposed into rows. `From` conversions cover the usual carriers, so
/// most callers never name this type.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    /// One row.
    Row(Row),
    /// Row-major batch.
    Rows(Vec<Row>),
    /// Columnar batch; value sequences must have equal length.
    Columns(IndexMap<String, Vec<CellValue>>),
}

impl DataInput {
    /// Build the columnar shape from ordered (field, values) pairs.
    pub fn columns<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<CellValue>)>,
    {
        Self::Columns(
            pairs
                .into_iter()
                .map(|(field, values)| (field.into(), values))
                .collect(),
        )
    }

    /// Normalize to the canonical row sequence.
    ///
    /// Columnar input is validated before any row is produced: the first
    /// entry's length is authoritative and every other entry must match it.
    pub(crate) fn into_rows(self) -> Result<Vec<Row>> {
        match self {
            DataInput::Row(row) => Ok(vec![row]),
            DataInput::Rows(rows) => Ok(rows),
            DataInput::Columns(columns) => transpose(columns),
        }
    }
}

fn transpose(columns: IndexMap<String, Vec<CellValue>>) -> Result<Vec<Row>> {
    let Some((first, first_values)) = columns.first() else {
        return Ok(Vec::new());
    };
    let first_len = first_values.len();
    for (field, values) in &columns {
        if values.len() != first_len {
            return Err(Error::Shape {
                first: first.clone(),
                first_len,
                field: field.clone(),
                len: values.len(),
            });
        }
    }

    let mut rows = Vec::with_capacity(first_len);
    for i in 0..first_len {
        let row: Row = columns
            .iter()
            .map(|(field, values)| (field.clone(), values[i].clone()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

impl From<Row> for DataInput {
    fn from(row: Row) -> Self {
        DataInput::Row(row)
    }
}

impl From<Vec<Row>> for DataInput {
    fn from(rows: Vec<Row>) -> Self {
        DataInput::Rows(rows)
    }
}

impl From<IndexMap<String, CellValue>> for DataInput {
    fn from(cells: IndexMap<String, CellValue>) -> Self {
        DataInput::Row(Row::from(cells))
    }
}

impl From<Vec<IndexMap<String, CellValue>>> for DataInput {
    fn from(maps: Vec<IndexMap<String, CellValue>>) -> Self {
        DataInput::Rows(maps.into_iter().map(Row::from).collect())
    }
}

impl From<IndexMap<String, Vec<CellValue>>> for DataInput {
    fn from(columns: IndexMap<String, Vec<CellValue>>) -> Self {
        DataInput::Columns(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{columns, row};

    #[test]
    fn test_single_row_normalizes_to_one_row() {
        let rows = DataInput::from(row! { "A" => 1 }).into_rows().unwrap();
        assert_eq!(rows, vec![row! { "A" => 1 }]);
    }

    #[test]
    fn test_columnar_transposes_row_major() {
        let input = columns! { "a" => [1, 2], "b" => ["x", "y"] };
        let rows = input.into_rows().unwrap();
        assert_eq!(
            rows,
            vec![row! { "a" => 1, "b" => "x" }, row! { "a" => 2, "b" => "y" }]
        );
    }

    #[test]
    fn test_columnar_length_mismatch_names_both_fields() {
        let err = columns! { "a" => [1, 2, 3], "b" => [1] }
            .into_rows()
            .unwrap_err();
        match err {
            Error::Shape {
                first,
                first_len,
                field,
                len,
            } => {
                assert_eq!(first, "a");
                assert_eq!(first_len, 3);
                assert_eq!(field, "b");
                assert_eq!(len, 1);
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_columnar_yields_no_rows() {
        let input = DataInput::Columns(IndexMap::new());
        assert_eq!(input.into_rows().unwrap(), Vec::<Row>::new());
    }
}
