use serde_json::{Map, Value};

use crate::error::StrataLayoutError;

/// Complete a partial layout against a default layout.
///
/// Both arguments must be JSON objects. Object values merge recursively,
/// array values in `overrides` replace the default array wholesale, and any
/// type mismatch between the two trees resolves in favor of the override
/// subtree. Neither argument is mutated; the result is a fresh tree.
pub fn merge(overrides: &Value, defaults: &Value) -> Result<Value, StrataLayoutError> {
    let override_map = overrides
        .as_object()
        .ok_or_else(|| StrataLayoutError::configuration_type("overrides", overrides))?;
    let default_map = defaults
        .as_object()
        .ok_or_else(|| StrataLayoutError::configuration_type("defaults", defaults))?;
    Ok(Value::Object(merge_objects(override_map, default_map)))
}

fn merge_objects(overrides: &Map<String, Value>, defaults: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::with_capacity(defaults.len() + overrides.len());
    for (key, default_value) in defaults {
        merged.insert(key.clone(), default_value.clone());
    }
    for (key, override_value) in overrides {
        let value = match (override_value, defaults.get(key)) {
            // Arrays always replace the default value at the same key
            (Value::Array(_), _) => override_value.clone(),
            (Value::Object(o), Some(Value::Object(d))) => Value::Object(merge_objects(o, d)),
            // Type mismatch or no default: the override subtree wins wholesale
            _ => override_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
