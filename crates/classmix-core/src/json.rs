//! JSON bridge — join a JSON-encoded argument list.
//!
//! Front-end toolchains that already hold component state in serialized form
//! can hand the joiner a JSON array instead of building [`ClassValue`]s by
//! hand. Object keys keep their insertion order (`serde_json` with the
//! `preserve_order` feature — IndexMap, not BTreeMap), so mapping expansion
//! is stable.
//!
//! JSON cannot express callables, custom renderers or `NaN`; those variants
//! are native-only.

use crate::error::Result;
use crate::types::ClassValue;
use serde_json::Value;

/// Join a JSON-encoded argument list into a space-separated class string.
///
/// A root-level array is the argument list; any other root value is treated
/// as a single argument.
///
/// # Errors
///
/// Returns [`ClassError::JsonParse`](crate::ClassError::JsonParse) if the
/// input is not valid JSON. Joining itself never fails.
///
/// # Examples
///
/// ```rust
/// let attr = classmix_core::join_json(r#"["btn", {"btn-primary": true}, null, 0]"#).unwrap();
/// assert_eq!(attr, "btn btn-primary");
/// ```
pub fn join_json(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let args: Vec<ClassValue> = match value {
        Value::Array(items) => items.into_iter().map(ClassValue::from).collect(),
        other => vec![ClassValue::from(other)],
    };
    Ok(crate::joiner::join(&args))
}

impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ClassValue::Null,
            Value::Bool(b) => ClassValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ClassValue::Int(i),
                // u64 beyond i64 range or a float — either way f64 is the
                // faithful view a dynamic caller would have had.
                None => ClassValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ClassValue::Str(s),
            Value::Array(items) => {
                ClassValue::List(items.into_iter().map(ClassValue::from).collect())
            }
            Value::Object(map) => ClassValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, ClassValue::from(value)))
                    .collect(),
            ),
        }
    }
}
