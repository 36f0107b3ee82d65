//! Generic command document
//!
//! The document is the structure read concerns are decoded from and
//! merged into. It is an ordered, string-keyed map of heterogeneous
//! JSON values:
//! - Lookup by key, with a string-typed accessor for decode
//! - In-place insertion for encode/append
//! - Generic encoding of any serializable value into a document

mod errors;

pub use errors::{DocumentError, DocumentResult};

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A key/value document with string keys and heterogeneous values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from a JSON object string.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DocumentError::NotAnObject(type_name(&other))),
        }
    }

    /// Encode any serializable value as a document.
    ///
    /// The value must serialize to an object; scalars and arrays are rejected.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> DocumentResult<Self> {
        match serde_json::to_value(value)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DocumentError::NotAnObject(type_name(&other))),
        }
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get the value stored under `key` if it is a string.
    ///
    /// Values of any other type are reported as absent.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Insert a field, returning the previous value if one existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// True if a field named `key` exists, whatever its type.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Render the document as compact JSON.
    pub fn to_json(&self) -> String {
        // A map of JSON values with string keys always serializes
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    /// Consume the document, returning the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_str_only_returns_strings() {
        let doc = Document::from_json(r#"{"level": "majority", "n": 1}"#).unwrap();
        assert_eq!(doc.get_str("level"), Some("majority"));
        assert_eq!(doc.get_str("n"), None);
        assert_eq!(doc.get_str("missing"), None);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut doc = Document::new();
        assert!(doc.insert("find", "users").is_none());
        let previous = doc.insert("find", "orders");
        assert_eq!(previous, Some(json!("users")));
        assert_eq!(doc.get_str("find"), Some("orders"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Document::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject("array")));

        let err = Document::from_json("{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn test_encode_struct() {
        #[derive(Serialize)]
        struct Find {
            find: &'static str,
            limit: u32,
        }

        let doc = Document::encode(&Find {
            find: "users",
            limit: 10,
        })
        .unwrap();
        assert_eq!(doc.get_str("find"), Some("users"));
        assert_eq!(doc.get("limit"), Some(&json!(10)));
    }

    #[test]
    fn test_encode_rejects_scalar() {
        let err = Document::encode(&42u32).unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject("number")));
    }

    #[test]
    fn test_display_is_json() {
        let mut doc = Document::new();
        doc.insert("level", "local");
        assert_eq!(doc.to_string(), r#"{"level":"local"}"#);
    }

    #[test]
    fn test_iter_in_key_order() {
        let doc = Document::from_json(r#"{"b": 2, "a": 1}"#).unwrap();
        let keys: Vec<&str> = doc.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_map_conversions() {
        let mut fields = Map::new();
        fields.insert("level".to_string(), json!("local"));

        let doc = Document::from(fields.clone());
        assert_eq!(doc.get_str("level"), Some("local"));
        assert_eq!(doc.to_json(), r#"{"level":"local"}"#);
        assert_eq!(doc.into_inner(), fields);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut doc: Document = vec![("a".to_string(), json!(1))].into_iter().collect();
        assert!(doc.contains_key("a"));
        assert_eq!(doc.remove("a"), Some(json!(1)));
        assert!(doc.is_empty());
    }
}
