//! Three-state optional fields for CV documents.
//!
//! The emitted JSON distinguishes between a field that is absent, a field
//! that is explicitly `null` (e.g. an idealised experiment with no calendar
//! start date) and a field with a value. [`Field`] makes that distinction
//! explicit in the type rather than through a sentinel value.

use serde::{Serialize, Serializer};

/// A document field that can be omitted, written as `null`, or written with
/// a value.
///
/// `Omit` fields are dropped from the document entirely; they rely on the
/// record structs tagging every `Field` with
/// `#[serde(skip_serializing_if = "Field::is_omit")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Do not write the field at all.
    #[default]
    Omit,
    /// Write the field with a JSON `null` value.
    Null,
    /// Write the field with the given value.
    Value(T),
}

impl<T> Field<T> {
    /// Whether the field should be dropped from the document.
    pub fn is_omit(&self) -> bool {
        matches!(self, Field::Omit)
    }

    /// The contained value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Apply `f` to the contained value, preserving `Omit`/`Null`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Omit => Field::Omit,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T: std::fmt::Display> Field<T> {
    /// Render the field for error messages.
    pub fn describe(&self) -> String {
        match self {
            Field::Omit => "<unset>".to_string(),
            Field::Null => "null".to_string(),
            Field::Value(v) => format!("`{v}`"),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Omit is normally filtered out by `skip_serializing_if`; if it
            // does reach the serializer it degrades to `null`.
            Field::Omit | Field::Null => serializer.serialize_none(),
            Field::Value(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_omit() {
        let field: Field<String> = Field::default();
        assert!(field.is_omit());
        assert_eq!(field.as_value(), None);
    }

    #[test]
    fn test_null_serialises_to_null() {
        let field: Field<u32> = Field::Null;
        assert_eq!(serde_json::to_value(&field).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_value_serialises_transparently() {
        let field = Field::Value("picontrol".to_string());
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            serde_json::Value::String("picontrol".to_string())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::from(Some(3)), Field::Value(3));
        assert_eq!(Field::<u32>::from(None), Field::Null);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Field::<u32>::Omit.describe(), "<unset>");
        assert_eq!(Field::<u32>::Null.describe(), "null");
        assert_eq!(Field::Value("historical").describe(), "`historical`");
    }
}
