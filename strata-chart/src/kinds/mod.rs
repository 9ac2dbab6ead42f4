pub mod line;
pub mod scatter;

use std::fmt::Debug;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::StrataChartError;
use crate::layer::DataLayer;

pub use line::LineKind;
pub use scatter::ScatterKind;

/// A renderer-consumable description of one visual mark: the element it
/// represents, its data-space coordinates, and its resolved visual channels.
/// Translating these into drawing operations is the render collaborator's
/// job; this core never touches a display surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMark {
    pub element_id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub channels: Map<String, Value>,
}

/// A registered data-layer kind: a default layout merged under every layer
/// config of this type, plus the mark production logic. Concrete kinds are
/// registry variants, not an inheritance chain.
pub trait DataLayerKind: Debug + Send + Sync {
    /// Type-specific layout defaults, merged under user-supplied layer
    /// configs before the shared data-layer defaults apply.
    fn default_layout(&self) -> Value;

    /// Produce marks for every record of the layer, in paint order.
    fn render(&self, layer: &DataLayer) -> Result<Vec<RenderMark>, StrataChartError>;
}

/// Open catalog of data-layer kinds, owned by the hosting application
/// context. `Default` seeds the built-in `scatter` and `line` kinds.
#[derive(Debug, Clone)]
pub struct DataLayerKindRegistry {
    kinds: IndexMap<String, Arc<dyn DataLayerKind>>,
}

impl DataLayerKindRegistry {
    /// An empty registry with no built-ins.
    pub fn empty() -> Self {
        Self {
            kinds: IndexMap::new(),
        }
    }

    /// Register a new kind, failing if the name is already taken.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        kind: Arc<dyn DataLayerKind>,
    ) -> Result<(), StrataChartError> {
        let name = name.into();
        if self.kinds.contains_key(&name) {
            return Err(StrataChartError::DuplicateLayerKind(name));
        }
        self.kinds.insert(name, kind);
        Ok(())
    }

    /// Register or replace a kind.
    pub fn set(&mut self, name: impl Into<String>, kind: Arc<dyn DataLayerKind>) {
        self.kinds.insert(name.into(), kind);
    }

    pub fn get(&self, name: &str) -> Result<&Arc<dyn DataLayerKind>, StrataChartError> {
        self.kinds
            .get(name)
            .ok_or_else(|| StrataChartError::UnknownLayerKind(name.to_string()))
    }

    pub fn list(&self) -> Vec<String> {
        self.kinds.keys().cloned().collect()
    }
}

impl Default for DataLayerKindRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.set("scatter", Arc::new(ScatterKind));
        registry.set("line", Arc::new(LineKind));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct NullKind;

    impl DataLayerKind for NullKind {
        fn default_layout(&self) -> Value {
            json!({"type": "null"})
        }

        fn render(&self, _layer: &DataLayer) -> Result<Vec<RenderMark>, StrataChartError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_default_registry_lists_builtins() {
        let registry = DataLayerKindRegistry::default();
        assert_eq!(registry.list(), vec!["scatter", "line"]);
        assert!(registry.get("scatter").is_ok());
        assert_eq!(
            registry.get("genes").unwrap_err(),
            StrataChartError::UnknownLayerKind("genes".to_string())
        );
    }

    #[test]
    fn test_add_rejects_duplicates_but_set_replaces() {
        let mut registry = DataLayerKindRegistry::default();
        assert_eq!(
            registry.add("line", Arc::new(NullKind)).unwrap_err(),
            StrataChartError::DuplicateLayerKind("line".to_string())
        );
        registry.add("null", Arc::new(NullKind)).unwrap();
        registry.set("line", Arc::new(NullKind));
        assert_eq!(registry.get("line").unwrap().default_layout()["type"], "null");
    }
}
