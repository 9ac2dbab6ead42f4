use serde_json::{Map, Value};

use crate::error::StrataScaleError;
use crate::registry::ScaleFunctionRegistry;

/// Resolve a scalable-parameter specification against one data record.
///
/// The spec is polymorphic:
/// - a literal scalar resolves to itself, independent of the datum;
/// - a descriptor object (`{scale_function, field, parameters}`) applies the
///   named registry function to `datum[field]`, resolving to null when no
///   branch matches;
/// - an array mixes the two, evaluated left to right with the first non-null
///   result winning, so a trailing literal acts as a fallback.
///
/// Unregistered function names only fail when they are actually evaluated.
pub fn resolve_scalable_parameter(
    spec: &Value,
    datum: &Map<String, Value>,
    registry: &ScaleFunctionRegistry,
) -> Result<Value, StrataScaleError> {
    match spec {
        Value::Array(elements) => {
            for element in elements {
                let resolved = resolve_scalable_parameter(element, datum, registry)?;
                if !resolved.is_null() {
                    return Ok(resolved);
                }
            }
            Ok(Value::Null)
        }
        Value::Object(descriptor) => {
            let Some(name) = descriptor.get("scale_function").and_then(Value::as_str) else {
                // Objects that are not descriptors resolve to nothing
                return Ok(Value::Null);
            };
            let function = registry.get(name)?;
            let field_value = descriptor
                .get("field")
                .and_then(Value::as_str)
                .and_then(|field| datum.get(field));
            let parameters = descriptor.get("parameters").unwrap_or(&Value::Null);
            Ok(function(parameters, field_value).unwrap_or(Value::Null))
        }
        literal => Ok(literal.clone()),
    }
}
