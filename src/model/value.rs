//! Cell values

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Scalars round-trip exactly as supplied; the store never inspects or
/// coerces them. The text codec renders them via [`CellValue::display`],
/// where null becomes the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Canonical text form: null renders as the empty string, every other
    /// scalar via its standard formatting.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rendering() {
        assert!(CellValue::Null.is_null());
        assert_eq!(CellValue::Null.display(), "");
        assert_eq!(CellValue::Bool(true).display(), "true");
        assert_eq!(CellValue::Int(42).display(), "42");
        assert_eq!(CellValue::Float(3.5).display(), "3.5");
        assert_eq!(CellValue::from("hello").display(), "hello");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Int(42));
        assert_eq!(CellValue::from(42i64), CellValue::Int(42));
        assert_eq!(CellValue::from(1.5), CellValue::Float(1.5));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some("x")), CellValue::from("x"));
    }

    #[test]
    fn test_no_cross_type_equality() {
        assert_ne!(CellValue::Int(1), CellValue::Float(1.0));
        assert_ne!(CellValue::from("1"), CellValue::Int(1));
        assert_ne!(CellValue::Null, CellValue::from(""));
    }

    #[test]
    fn test_nan_equals_nan() {
        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(f64::NAN));
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_string(&CellValue::Float(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let back: CellValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellValue::Float(2.5));
    }
}
