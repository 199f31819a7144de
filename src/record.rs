//! # Record Data Model
//!
//! Records are the items that flow through FeedWeave pipelines: ordered
//! mappings from field name to JSON value. Stages treat records as opaque
//! except for the fields they are configured to look at.
//!
//! ## Overview
//!
//! - **[`Record`]**: an ordered field mapping backed by [`serde_json::Map`]
//!   (insertion order is preserved)
//! - **[`KeyValue`]**: the hashable projection of a field value, used as a
//!   set-membership key by deduplicating stages
//! - **[`FeedItem`]**: the stream item type, `Result<Record, FeedError>`
//! - **[`from_values`]**: intake adapter from raw JSON values
//!
//! ## Key Extraction
//!
//! [`Record::key_value`] looks up a single field and projects it to a
//! [`KeyValue`]. Scalars (null, booleans, numbers, strings) project
//! directly. A missing field projects to [`KeyValue::Null`]: absence is a
//! defined sentinel key, equal to an explicit `null` field, so records
//! missing the field deduplicate against each other. Arrays and objects do
//! not hash to a comparable key and fail with
//! [`FeedError::KeyExtraction`].

use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One item flowing on a feed stream: a record, or the error that replaced it.
pub type FeedItem = Result<Record, FeedError>;

/// One structured item flowing through the pipeline, modeled as an ordered
/// field mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
  /// Creates an empty record.
  pub fn new() -> Self {
    Self(Map::new())
  }

  /// Looks up a field by name, returning `None` when the field is absent.
  pub fn get(&self, field: &str) -> Option<&Value> {
    self.0.get(field)
  }

  /// Inserts a field, returning the previous value if the field existed.
  pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
    self.0.insert(field.into(), value)
  }

  /// Returns the number of fields in the record.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns `true` if the record has no fields.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterates over the fields in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
    self.0.iter()
  }

  /// Projects the named field to its hashable key value.
  ///
  /// A missing field projects to [`KeyValue::Null`]; array- and
  /// object-valued fields fail with [`FeedError::KeyExtraction`].
  pub fn key_value(&self, field: &str) -> Result<KeyValue, FeedError> {
    match self.get(field) {
      None => Ok(KeyValue::Null),
      Some(value) => KeyValue::from_field_value(value).map_err(|found| {
        FeedError::KeyExtraction {
          field: field.to_string(),
          found: found.to_string(),
        }
      }),
    }
  }

  /// Consumes the record, returning the underlying field map.
  pub fn into_map(self) -> Map<String, Value> {
    self.0
  }
}

impl From<Map<String, Value>> for Record {
  fn from(map: Map<String, Value>) -> Self {
    Self(map)
  }
}

impl TryFrom<Value> for Record {
  type Error = FeedError;

  /// Converts a raw JSON value into a record.
  ///
  /// Anything other than an object is a [`FeedError::InputType`] error;
  /// malformed feed elements are signaled, never silently skipped.
  fn try_from(value: Value) -> Result<Self, Self::Error> {
    match value {
      Value::Object(map) => Ok(Self(map)),
      other => Err(FeedError::InputType {
        found: json_type_name(&other).to_string(),
      }),
    }
  }
}

/// Converts a sequence of raw JSON values into feed items.
///
/// Non-object elements surface as `Err` items in place, preserving the
/// position of the failure in the feed.
pub fn from_values<I>(values: I) -> impl Iterator<Item = FeedItem>
where
  I: IntoIterator<Item = Value>,
{
  values.into_iter().map(Record::try_from)
}

/// The hashable projection of a record field used for set membership.
///
/// Only scalar JSON values project to keys. `Null` doubles as the sentinel
/// for absent fields, so "missing" is itself a valid, comparable key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
  /// An explicit `null` field, or the sentinel for an absent field.
  Null,
  /// A boolean field value.
  Bool(bool),
  /// A numeric field value.
  Number(Number),
  /// A string field value.
  String(String),
}

impl KeyValue {
  /// Projects a JSON field value to a key, or reports the non-hashable
  /// JSON type that was found.
  pub fn from_field_value(value: &Value) -> Result<Self, &'static str> {
    match value {
      Value::Null => Ok(KeyValue::Null),
      Value::Bool(b) => Ok(KeyValue::Bool(*b)),
      Value::Number(n) => Ok(KeyValue::Number(n.clone())),
      Value::String(s) => Ok(KeyValue::String(s.clone())),
      Value::Array(_) => Err("array"),
      Value::Object(_) => Err("object"),
    }
  }
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
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

  fn record(value: Value) -> Record {
    Record::try_from(value).unwrap()
  }

  #[test]
  fn key_value_scalars() {
    let rec = record(json!({"title": "a", "count": 3, "ok": true, "note": null}));
    assert_eq!(
      rec.key_value("title").unwrap(),
      KeyValue::String("a".to_string())
    );
    assert_eq!(
      rec.key_value("count").unwrap(),
      KeyValue::Number(Number::from(3))
    );
    assert_eq!(rec.key_value("ok").unwrap(), KeyValue::Bool(true));
    assert_eq!(rec.key_value("note").unwrap(), KeyValue::Null);
  }

  #[test]
  fn missing_field_is_null_sentinel() {
    let rec = record(json!({"x": 1}));
    assert_eq!(rec.key_value("title").unwrap(), KeyValue::Null);
    // Absent and explicit null extract to the same key.
    let with_null = record(json!({"title": null}));
    assert_eq!(rec.key_value("title"), with_null.key_value("title"));
  }

  #[test]
  fn composite_fields_do_not_extract() {
    let rec = record(json!({"tags": ["a", "b"], "meta": {"k": 1}}));
    assert_eq!(
      rec.key_value("tags"),
      Err(FeedError::KeyExtraction {
        field: "tags".to_string(),
        found: "array".to_string(),
      })
    );
    assert_eq!(
      rec.key_value("meta"),
      Err(FeedError::KeyExtraction {
        field: "meta".to_string(),
        found: "object".to_string(),
      })
    );
  }

  #[test]
  fn non_object_values_are_input_type_errors() {
    assert!(Record::try_from(json!({"x": 1})).is_ok());
    assert_eq!(
      Record::try_from(json!([1, 2])),
      Err(FeedError::InputType {
        found: "array".to_string(),
      })
    );
    assert_eq!(
      Record::try_from(json!(42)),
      Err(FeedError::InputType {
        found: "number".to_string(),
      })
    );
  }

  #[test]
  fn from_values_preserves_positions() {
    let items: Vec<FeedItem> =
      from_values(vec![json!({"x": 0}), json!("oops"), json!({"x": 1})]).collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert_eq!(
      items[1],
      Err(FeedError::InputType {
        found: "string".to_string(),
      })
    );
    assert!(items[2].is_ok());
  }

  #[test]
  fn record_preserves_field_order() {
    let rec = record(json!({"z": 1, "a": 2, "m": 3}));
    let fields: Vec<&String> = rec.iter().map(|(k, _)| k).collect();
    assert_eq!(fields, ["z", "a", "m"]);
  }
}
