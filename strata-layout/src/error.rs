#[derive(Debug, PartialEq, thiserror::Error)]
pub enum StrataLayoutError {
    #[error("Layout merge requires object arguments, got {argument}: {found}")]
    ConfigurationType {
        argument: &'static str,
        found: String,
    },
}

impl StrataLayoutError {
    pub(crate) fn configuration_type(
        argument: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        let found = match value {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(_) => "a boolean".to_string(),
            serde_json::Value::Number(_) => "a number".to_string(),
            serde_json::Value::String(_) => "a string".to_string(),
            serde_json::Value::Array(_) => "an array".to_string(),
            serde_json::Value::Object(_) => "an object".to_string(),
        };
        Self::ConfigurationType { argument, found }
    }
}
