//! Rows and row construction macros

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// One record: an ordered field-to-value association.
///
/// Field order is first-seen order and governs the column order emitted by
/// the codec. Inside a [`Dataset`](crate::Dataset) every row carries exactly
/// the schema's field set; a row built by hand may be ragged until inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self {
            cells: IndexMap::new(),
        }
    }

    /// Get a cell value by field name
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    /// Set a field's value, appending the field to the order if unseen.
    ///
    /// Setting an existing field replaces its value and keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(field.into(), value.into());
    }

    /// Check whether the row has the given field
    pub fn contains_field(&self, field: &str) -> bool {
        self.cells.contains_key(field)
    }

    /// Field names in row order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over (field, value) pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl From<IndexMap<String, CellValue>> for Row {
    fn from(cells: IndexMap<String, CellValue>) -> Self {
        Self { cells }
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a CellValue);
    type IntoIter = indexmap::map::Iter<'a, String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Build a [`Row`] from `field => value` pairs.
///
/// This is the single-row construction shorthand:
///
/// ```
/// use txtdata::{row, CellValue};
///
/// let row = row! { "A" => 182, "C" => "asdf" };
/// assert_eq!(row.get("A"), Some(&CellValue::Int(182)));
/// assert_eq!(row.get("C"), Some(&CellValue::from("asdf")));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ( $( $field:expr => $value:expr ),+ $(,)? ) => {{
        let mut row = $crate::Row::new();
        $( row.insert($field, $value); )+
        row
    }};
}

/// Build the columnar input shape from `field => [values]` entries.
///
/// Expands to a [`DataInput::Columns`](crate::DataInput) value; all value
/// sequences must have equal length when the input is consumed.
///
/// ```
/// use txtdata::{columns, Dataset};
///
/// let data = Dataset::from_data(columns! {
///     "a" => [1, 2, 3],
///     "b" => ["x", "y", "z"],
/// })?;
/// assert_eq!(data.len(), 3);
/// # Ok::<(), txtdata::Error>(())
/// ```
#[macro_export]
macro_rules! columns {
    ( $( $field:expr => [ $( $value:expr ),* $(,)? ] ),+ $(,)? ) => {
        $crate::DataInput::columns([
            $( ( $field, ::std::vec![ $( $crate::CellValue::from($value) ),* ] ) ),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_first_seen() {
        let mut row = row! { "B" => 1, "A" => 2 };
        row.insert("B", 3);
        row.insert("C", 4);
        assert_eq!(row.fields().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(row.get("B"), Some(&CellValue::Int(3)));
        assert!(row.contains_field("C"));
        assert!(!row.contains_field("D"));
        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let row = row! { "A" => 1, "B" => "x", "C" => CellValue::Null, "D" => true };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"A":1,"B":"x","C":null,"D":true}"#);
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
