//! JSON rendering and ignore-empty merging.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Render a value as pretty-printed JSON, indented with tabs.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    let rendered = String::from_utf8(buf).map_err(|e| serde_json::Error::custom(e.to_string()))?;
    Ok(rendered)
}

/// Render a value as compact single-line JSON.
pub fn to_json_flat<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Shallow-merge `source` object fields into `target`, skipping empty ones.
///
/// A source field is skipped when it holds its type's zero value: `null`,
/// `""`, `0`, `false`, `[]`, or `{}`. Non-empty fields overwrite the
/// target's value wholesale; nested objects are replaced, not recursed
/// into. Both operands must be JSON objects.
pub fn merge_non_empty(target: &mut Value, source: &Value) -> Result<()> {
    let source_map = source
        .as_object()
        .ok_or_else(|| Error::invalid_input("source", "must be a JSON object"))?;
    let target_map = target
        .as_object_mut()
        .ok_or_else(|| Error::invalid_input("target", "must be a JSON object"))?;

    for (key, value) in source_map {
        if is_empty_value(value) {
            continue;
        }
        target_map.insert(key.clone(), value.clone());
    }

    Ok(())
}

/// Typed wrapper over [`merge_non_empty`] via a serde round-trip.
///
/// Returns a new value of the target's type with every non-empty source
/// field applied on top.
pub fn merge_structs<T, S>(target: &T, source: &S) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    S: Serialize,
{
    let mut target_value = serde_json::to_value(target)?;
    let source_value = serde_json::to_value(source)?;
    merge_non_empty(&mut target_value, &source_value)?;
    Ok(serde_json::from_value(target_value)?)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
