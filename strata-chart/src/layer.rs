use std::sync::Arc;

use serde_json::{json, Map, Value};
use strata_layout::merge;
use strata_scales::{axis_extent, resolve_scalable_parameter};
use strata_scales::{Axis, AxisConfig, AxisExtent, StrataScaleError};

use crate::context::ChartContext;
use crate::error::StrataChartError;
use crate::kinds::RenderMark;
use crate::predicates::TooltipBehavior;
use crate::state::ElementState;

/// A renderable, data-bound collection of visual marks within a panel.
///
/// The data-fetch collaborator replaces `data` wholesale via
/// [`set_data`](Self::set_data); resolving encodings or extents against the
/// same records any number of times always produces the same output.
#[derive(Debug, Clone)]
pub struct DataLayer {
    id: String,
    kind: String,
    layout: Value,
    id_field: String,
    tooltip: TooltipBehavior,
    data: Vec<Map<String, Value>>,
    state: ElementState,
    z_index: usize,
    ctx: Arc<ChartContext>,
}

impl DataLayer {
    /// Shared defaults merged under every layer's kind-specific defaults.
    pub fn default_layout() -> Value {
        json!({
            "type": "scatter",
            "fields": [],
            "id_field": "id",
            "x_axis": {},
            "y1_axis": {},
            "y2_axis": {}
        })
    }

    pub(crate) fn new(config: &Value, ctx: Arc<ChartContext>) -> Result<Self, StrataChartError> {
        let kind = config
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("scatter")
            .to_string();
        let kind_defaults = merge(
            &ctx.layer_kinds().get(&kind)?.default_layout(),
            &Self::default_layout(),
        )?;
        let layout = merge(config, &kind_defaults)?;
        let id = layout
            .get("id")
            .and_then(Value::as_str)
            .ok_or(StrataChartError::MissingLayerId)?
            .to_string();
        let id_field = layout
            .get("id_field")
            .and_then(Value::as_str)
            .unwrap_or("id")
            .to_string();
        let tooltip = TooltipBehavior::from_layout(layout.get("tooltip"))?;
        Ok(Self {
            id,
            kind,
            layout,
            id_field,
            tooltip,
            data: Vec::new(),
            state: ElementState::new(),
            z_index: 0,
            ctx,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The fully merged layout for this layer.
    pub fn layout(&self) -> &Value {
        &self.layout
    }

    /// Paint rank among sibling layers; render order is ascending.
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    pub(crate) fn set_z_index(&mut self, z_index: usize) {
        self.z_index = z_index;
    }

    pub fn data(&self) -> &[Map<String, Value>] {
        &self.data
    }

    /// Replace this layer's records (the data-fetch collaborator's entry
    /// point). Records must be fully resolved before encodings run.
    pub fn set_data(&mut self, data: Vec<Map<String, Value>>) {
        self.data = data;
    }

    pub fn state(&self) -> &ElementState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }

    /// The identifier a record contributes to interaction state, taken from
    /// the layer's `id_field`.
    pub fn element_id(&self, datum: &Map<String, Value>) -> Option<String> {
        match datum.get(&self.id_field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Resolve a scalable-parameter spec against one of this layer's records
    /// using the context's scale-function catalog.
    pub fn resolve_scalable_parameter(
        &self,
        spec: &Value,
        datum: &Map<String, Value>,
    ) -> Result<Value, StrataChartError> {
        Ok(resolve_scalable_parameter(
            spec,
            datum,
            self.ctx.scale_functions(),
        )?)
    }

    /// The field configured for an axis, if any.
    pub fn axis_field(&self, axis: Axis) -> Option<&str> {
        self.layout
            .get(axis.layout_key())?
            .get("field")?
            .as_str()
    }

    /// Numeric value of a record at an axis field.
    pub fn axis_value(&self, axis: Axis, datum: &Map<String, Value>) -> Option<f64> {
        let field = self.axis_field(axis)?;
        datum.get(field).and_then(|v| strata_scales::utils::coerce_numeric(v))
    }

    /// Compute the numeric extent for one of this layer's axes.
    ///
    /// The identifier must name a member of the closed axis set (`x`, `y1`,
    /// `y2`) whose layout subtree is configured with a field; anything else
    /// is an invalid-axis error. Data content never makes this fail.
    pub fn axis_extent(&self, identifier: &str) -> Result<AxisExtent, StrataChartError> {
        let axis = Axis::parse(identifier)?;
        let subtree = self
            .layout
            .get(axis.layout_key())
            .filter(|subtree| subtree.get("field").is_some_and(|f| f.is_string()))
            .ok_or_else(|| StrataScaleError::InvalidAxis(identifier.to_string()))?;
        let config: AxisConfig = serde_json::from_value(subtree.clone())
            .map_err(|_| StrataScaleError::InvalidAxis(identifier.to_string()))?;
        Ok(axis_extent(&self.data, &config))
    }

    /// Whether the tooltip for an element should display, given the layer's
    /// show/hide predicate trees and current interaction state.
    pub fn should_show_tooltip(&self, element_id: &str) -> bool {
        self.tooltip.should_show(&self.state, element_id)
    }

    /// Produce render marks by dispatching through this layer's registered
    /// kind.
    pub fn render(&self) -> Result<Vec<RenderMark>, StrataChartError> {
        let kind = Arc::clone(self.ctx.layer_kinds().get(&self.kind)?);
        kind.render(self)
    }
}
