use strata_scales::ScaleFunctionRegistry;

use crate::kinds::DataLayerKindRegistry;

/// Registries backing a family of plots, owned by the hosting application
/// and injected into each [`Plot`](crate::plot::Plot). There is deliberately
/// no process-wide instance: hosts that want isolated catalogs construct
/// isolated contexts.
#[derive(Debug, Clone, Default)]
pub struct ChartContext {
    scale_functions: ScaleFunctionRegistry,
    layer_kinds: DataLayerKindRegistry,
}

impl ChartContext {
    /// A context seeded with the built-in scale functions and layer kinds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_functions(&self) -> &ScaleFunctionRegistry {
        &self.scale_functions
    }

    pub fn scale_functions_mut(&mut self) -> &mut ScaleFunctionRegistry {
        &mut self.scale_functions
    }

    pub fn layer_kinds(&self) -> &DataLayerKindRegistry {
        &self.layer_kinds
    }

    pub fn layer_kinds_mut(&mut self) -> &mut DataLayerKindRegistry {
        &mut self.layer_kinds
    }
}
