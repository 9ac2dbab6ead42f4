use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::StrataScaleError;
use crate::utils::coerce_numeric;

/// A named scale function: given the descriptor's `parameters` object and the
/// datum's field value (if any), produce a concrete value or `None` when no
/// branch of the function matches.
pub type ScaleFn = Arc<dyn Fn(&Value, Option<&Value>) -> Option<Value> + Send + Sync>;

/// Open catalog of scale functions, owned by the hosting application context.
///
/// `Default` seeds the built-in catalog (`categorical_bin`, `if`,
/// `numerical_bin`); hosts register additional functions at runtime with
/// [`add`](Self::add) or [`set`](Self::set).
#[derive(Clone)]
pub struct ScaleFunctionRegistry {
    functions: IndexMap<String, ScaleFn>,
}

impl ScaleFunctionRegistry {
    /// An empty registry with no built-ins.
    pub fn empty() -> Self {
        Self {
            functions: IndexMap::new(),
        }
    }

    /// Register a new function, failing if the name is already taken.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        function: ScaleFn,
    ) -> Result<(), StrataScaleError> {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(StrataScaleError::DuplicateScaleFunction(name));
        }
        self.functions.insert(name, function);
        Ok(())
    }

    /// Register or replace a function.
    pub fn set(&mut self, name: impl Into<String>, function: ScaleFn) {
        self.functions.insert(name.into(), function);
    }

    pub fn get(&self, name: &str) -> Result<&ScaleFn, StrataScaleError> {
        self.functions
            .get(name)
            .ok_or_else(|| StrataScaleError::UnknownScaleFunction(name.to_string()))
    }

    pub fn list(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }
}

impl Default for ScaleFunctionRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.set("categorical_bin", Arc::new(categorical_bin));
        registry.set("if", Arc::new(if_value));
        registry.set("numerical_bin", Arc::new(numerical_bin));
        registry
    }
}

impl std::fmt::Debug for ScaleFunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleFunctionRegistry")
            .field("functions", &self.list())
            .finish()
    }
}

/// Exact-match lookup of the field value in the parallel `categories` /
/// `values` arrays.
fn categorical_bin(parameters: &Value, value: Option<&Value>) -> Option<Value> {
    let categories = parameters.get("categories")?.as_array()?;
    let values = parameters.get("values")?.as_array()?;
    let value = value?;
    let position = categories.iter().position(|category| category == value)?;
    values.get(position).cloned()
}

/// Equality test against `parameters.field_value`, returning
/// `parameters.then` on a match.
fn if_value(parameters: &Value, value: Option<&Value>) -> Option<Value> {
    let expected = parameters.get("field_value")?;
    if value == Some(expected) {
        parameters.get("then").cloned()
    } else {
        None
    }
}

/// Bucket a numeric field value against the ascending `breaks` array; the
/// matching entry of `values` is the one for the last break at or below the
/// value (values below the first break fall into the first bucket).
/// Non-numeric input yields `parameters.null_value` when present.
fn numerical_bin(parameters: &Value, value: Option<&Value>) -> Option<Value> {
    let breaks = parameters.get("breaks")?.as_array()?;
    let values = parameters.get("values")?.as_array()?;
    let numeric = value.and_then(coerce_numeric);
    let Some(numeric) = numeric else {
        return parameters.get("null_value").cloned();
    };
    let mut bucket = 0;
    for (idx, brk) in breaks.iter().enumerate() {
        match coerce_numeric(brk) {
            Some(b) if numeric >= b => bucket = idx,
            _ => break,
        }
    }
    values.get(bucket).cloned()
}
