//! The row store

use std::ops::Add;
use std::path::Path;

use indexmap::IndexMap;

use crate::codec;
use crate::error::{Error, Result};
use crate::file;

use super::input::DataInput;
use super::row::Row;
use super::value::CellValue;

/// Default field delimiter for the text format.
pub const DEFAULT_DELIMITER: &str = ";";

/// An ordered sequence of rows sharing one schema.
///
/// Every row holds exactly the same field set at any observable moment:
/// inserting a row with unseen fields backfills every existing row with null
/// for them, and an incoming row missing known fields is padded with null
/// before it is appended.
///
/// # Examples
///
/// ```
/// use txtdata::{row, Dataset};
///
/// let mut data = Dataset::new();
/// data.insert(row! { "A" => 123 })?;
/// data.insert(row! { "B" => 111 })?;
/// assert_eq!(data.fields(), vec!["A", "B"]);
/// assert_eq!(data.len(), 2);
/// # Ok::<(), txtdata::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    delimiter: String,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    /// Create an empty dataset with the default delimiter.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Create a dataset from any accepted input shape.
    ///
    /// Rows are inserted one by one, so schema union applies incrementally
    /// in sequence order.
    pub fn from_data(data: impl Into<DataInput>) -> Result<Self> {
        let mut dataset = Self::new();
        dataset.insert(data)?;
        Ok(dataset)
    }

    /// Set the delimiter used when saving this dataset.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// The configured delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Check if the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The current schema in field order; empty for an empty dataset.
    pub fn fields(&self) -> Vec<&str> {
        match self.rows.first() {
            Some(row) => row.fields().collect(),
            None => Vec::new(),
        }
    }

    /// Read-only view of the row sequence
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Insert rows in place.
    ///
    /// Accepts the same shapes as [`from_data`](Self::from_data). Fields new
    /// to the store are added to every existing row as null; fields the
    /// incoming row lacks are padded with null. Invalid columnar input fails
    /// before the store is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use txtdata::{columns, row, Dataset};
    ///
    /// let mut data = Dataset::new();
    /// data.insert(row! { "A" => 123, "B" => "zzz" })?;
    /// data.insert(vec![row! { "A" => 1 }, row! { "B" => "x", "C" => "yes" }])?;
    /// data.insert(columns! { "A" => [1, 3], "B" => ["yyy", "www"] })?;
    /// assert_eq!(data.len(), 5);
    /// # Ok::<(), txtdata::Error>(())
    /// ```
    pub fn insert(&mut self, data: impl Into<DataInput>) -> Result<()> {
        let rows = data.into().into_rows()?;
        for row in rows {
            self.insert_row(row);
        }
        Ok(())
    }

    /// Append one row, growing the schema and backfilling as needed.
    fn insert_row(&mut self, row: Row) {
        let mut schema: Vec<String> = self.fields().into_iter().map(String::from).collect();
        let new_fields: Vec<String> = row
            .fields()
            .filter(|field| !schema.iter().any(|known| known.as_str() == *field))
            .map(String::from)
            .collect();

        if !new_fields.is_empty() {
            for existing in &mut self.rows {
                for field in &new_fields {
                    existing.insert(field.clone(), CellValue::Null);
                }
            }
            schema.extend(new_fields);
        }

        let mut normalized = Row::new();
        for field in schema {
            let value = row.get(&field).cloned().unwrap_or(CellValue::Null);
            normalized.insert(field, value);
        }
        self.rows.push(normalized);
    }

    /// Filter rows by (field, value) predicates with OR semantics.
    ///
    /// Each predicate contributes the rows whose value at that field equals
    /// the given value; contributions concatenate in predicate order and a
    /// row selected by several predicates appears once per predicate. A
    /// field outside the schema matches nothing. Not in place: the result is
    /// an independent dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use txtdata::{row, CellValue, Dataset};
    ///
    /// let data = Dataset::from_data(vec![
    ///     row! { "A" => CellValue::Null, "B" => 10, "C" => 50 },
    ///     row! { "A" => 150, "B" => 50, "C" => 39 },
    ///     row! { "A" => 32, "B" => 50, "C" => 2 },
    /// ])?;
    ///
    /// let matched = data.filter([("A", 150), ("B", 10)]);
    /// assert_eq!(
    ///     matched.rows(),
    ///     &[
    ///         row! { "A" => 150, "B" => 50, "C" => 39 },
    ///         row! { "A" => CellValue::Null, "B" => 10, "C" => 50 },
    ///     ]
    /// );
    /// # Ok::<(), txtdata::Error>(())
    /// ```
    pub fn filter<I, K, V>(&self, predicates: I) -> Dataset
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<CellValue>,
    {
        let mut rows = Vec::new();
        for (field, value) in predicates {
            let field = field.as_ref();
            let value = value.into();
            rows.extend(
                self.rows
                    .iter()
                    .filter(|row| row.get(field) == Some(&value))
                    .cloned(),
            );
        }
        Dataset {
            rows,
            delimiter: self.delimiter.clone(),
        }
    }

    /// Delete every row matching any predicate, in place.
    ///
    /// All predicate fields are validated against the schema before any row
    /// is removed; an unknown field fails with [`Error::UnknownField`] and
    /// leaves the dataset unchanged. Predicate values are never type-checked.
    pub fn delete<I, K, V>(&mut self, predicates: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        let predicates: Vec<(String, CellValue)> = predicates
            .into_iter()
            .map(|(field, value)| (field.into(), value.into()))
            .collect();

        for (field, _) in &predicates {
            if !self.fields().contains(&field.as_str()) {
                return Err(Error::UnknownField(field.clone()));
            }
        }

        for (field, value) in predicates {
            self.rows.retain(|row| row.get(&field) != Some(&value));
        }
        Ok(())
    }

    /// Columnar view of the dataset: field to values in row order.
    pub fn to_columns(&self) -> IndexMap<String, Vec<CellValue>> {
        let mut columns: IndexMap<String, Vec<CellValue>> = IndexMap::new();
        for field in self.fields() {
            columns.insert(field.to_string(), Vec::with_capacity(self.rows.len()));
        }
        for row in &self.rows {
            for (field, value) in row.iter() {
                if let Some(values) = columns.get_mut(field) {
                    values.push(value.clone());
                }
            }
        }
        columns
    }

    /// Read a dataset from a `.txt` file using the default delimiter.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Read a dataset from a `.txt` file, splitting on `delimiter`.
    ///
    /// Decoded rows pass through the normal insert path, so ragged lines end
    /// up null-padded to the full header schema.
    pub fn load_with_delimiter(
        path: impl AsRef<Path>,
        delimiter: impl Into<String>,
    ) -> Result<Self> {
        let delimiter = delimiter.into();
        let lines = file::read_lines(path.as_ref())?;
        let rows = codec::decode(&lines, &delimiter);
        let mut dataset = Self::new().with_delimiter(delimiter);
        dataset.insert(rows)?;
        Ok(dataset)
    }

    /// Write the dataset to a `.txt` file with its configured delimiter.
    ///
    /// Parent directories are created if absent. Fails with
    /// [`Error::EmptyDataset`] when there is no row to derive a header from.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_delimiter(path, &self.delimiter)
    }

    /// Write the dataset with a per-call delimiter override.
    pub fn save_with_delimiter(&self, path: impl AsRef<Path>, delimiter: &str) -> Result<()> {
        let lines = codec::encode(&self.rows, delimiter)?;
        file::write_lines(path.as_ref(), &lines)
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for Dataset {}

impl Add for &Dataset {
    type Output = Dataset;

    /// Concatenate two datasets into a new one.
    ///
    /// Both operands' rows pass through the normal insert path, so schema
    /// union and null backfill apply across the two schemas. The result
    /// keeps the left operand's delimiter.
    fn add(self, other: &Dataset) -> Dataset {
        let mut combined = Dataset {
            rows: Vec::new(),
            delimiter: self.delimiter.clone(),
        };
        for row in self.rows.iter().chain(other.rows.iter()) {
            combined.insert_row(row.clone());
        }
        combined
    }
}

impl Add for Dataset {
    type Output = Dataset;

    fn add(self, other: Dataset) -> Dataset {
        &self + &other
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
