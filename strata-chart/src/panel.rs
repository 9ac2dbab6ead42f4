use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{json, Value};
use strata_layout::{merge, OrderedIds};

use crate::context::ChartContext;
use crate::error::StrataChartError;
use crate::layer::DataLayer;

/// An absolute pixel offset within the plot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A horizontally-full, vertically-stacked region hosting one or more data
/// layers.
///
/// All geometry fields (`origin`, proportional origin and extents, pixel
/// width/height) are derived by the plot's relayout pass, never authored.
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    layout: Value,
    layout_idx: usize,
    y_index: usize,
    origin: Point,
    proportional_origin: Point,
    proportional_width: f64,
    proportional_height: f64,
    width: f64,
    height: f64,
    layers: IndexMap<String, DataLayer>,
    layer_order: OrderedIds,
    ctx: Arc<ChartContext>,
}

impl Panel {
    pub fn default_layout() -> Value {
        json!({
            "min_width": 0,
            "min_height": 0,
            "data_layers": []
        })
    }

    pub(crate) fn new(config: &Value, ctx: Arc<ChartContext>) -> Result<Self, StrataChartError> {
        let layout = merge(config, &Self::default_layout())?;
        let id = layout
            .get("id")
            .and_then(Value::as_str)
            .ok_or(StrataChartError::MissingPanelId)?
            .to_string();
        let mut panel = Self {
            id,
            layout_idx: 0,
            y_index: 0,
            origin: Point::default(),
            proportional_origin: Point::default(),
            proportional_width: 1.0,
            proportional_height: 0.0,
            width: 0.0,
            height: 0.0,
            layers: IndexMap::new(),
            layer_order: OrderedIds::new(),
            ctx,
            layout,
        };
        let layer_configs = match panel.layout.get("data_layers") {
            Some(Value::Array(configs)) => configs.clone(),
            _ => Vec::new(),
        };
        for config in &layer_configs {
            panel.add_data_layer(config)?;
        }
        Ok(panel)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The fully merged layout for this panel.
    pub fn layout(&self) -> &Value {
        &self.layout
    }

    /// Position among siblings in the order panels were added.
    pub fn layout_idx(&self) -> usize {
        self.layout_idx
    }

    pub(crate) fn set_layout_idx(&mut self, layout_idx: usize) {
        self.layout_idx = layout_idx;
    }

    /// Rank in the vertical stack; stacking order is ascending.
    pub fn y_index(&self) -> usize {
        self.y_index
    }

    pub(crate) fn set_y_index(&mut self, y_index: usize) {
        self.y_index = y_index;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn proportional_origin(&self) -> Point {
        self.proportional_origin
    }

    pub fn proportional_width(&self) -> f64 {
        self.proportional_width
    }

    pub fn proportional_height(&self) -> f64 {
        self.proportional_height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn min_width(&self) -> f64 {
        self.layout_number("min_width").unwrap_or(0.0)
    }

    pub fn min_height(&self) -> f64 {
        self.layout_number("min_height").unwrap_or(0.0)
    }

    pub(crate) fn authored_height(&self) -> Option<f64> {
        self.layout_number("height")
    }

    pub(crate) fn authored_proportional_height(&self) -> Option<f64> {
        self.layout_number("proportional_height")
    }

    pub(crate) fn authored_proportional_width(&self) -> Option<f64> {
        self.layout_number("proportional_width")
    }

    pub(crate) fn requested_y_index(&self) -> Option<i64> {
        self.layout.get("y_index").and_then(Value::as_i64)
    }

    fn layout_number(&self, key: &str) -> Option<f64> {
        self.layout.get(key).and_then(Value::as_f64)
    }

    /// Derived geometry, written by the plot's relayout pass.
    pub(crate) fn apply_geometry(
        &mut self,
        proportional_height: f64,
        proportional_origin_y: f64,
        plot_width: f64,
        plot_height: f64,
    ) {
        self.proportional_width = self.authored_proportional_width().unwrap_or(1.0);
        self.proportional_height = proportional_height;
        self.proportional_origin = Point {
            x: 0.0,
            y: proportional_origin_y,
        };
        self.origin = Point {
            x: 0.0,
            y: proportional_origin_y * plot_height,
        };
        self.width = self.proportional_width * plot_width;
        self.height = proportional_height * plot_height;
    }

    /// Add a data layer from a partial config; its `z_index` resolves
    /// through the shared ordering rule.
    pub fn add_data_layer(&mut self, config: &Value) -> Result<&DataLayer, StrataChartError> {
        let layer = DataLayer::new(config, Arc::clone(&self.ctx))?;
        let id = layer.id().to_string();
        if self.layers.contains_key(&id) {
            return Err(StrataChartError::DuplicateLayerId(id));
        }
        let requested = layer.layout().get("z_index").and_then(Value::as_i64);
        self.layer_order.insert(id.clone(), requested);
        self.layers.insert(id.clone(), layer);
        self.sync_layer_z_indices();
        self.layers
            .get(&id)
            .ok_or_else(|| StrataChartError::Internal(format!("layer `{id}` vanished after insert")))
    }

    /// Remove a data layer; sibling `z_index` values compact to stay dense.
    pub fn remove_data_layer(&mut self, id: &str) -> Result<(), StrataChartError> {
        if self.layers.shift_remove(id).is_none() {
            return Err(StrataChartError::UnknownLayerId(id.to_string()));
        }
        self.layer_order.remove(id);
        self.sync_layer_z_indices();
        Ok(())
    }

    fn sync_layer_z_indices(&mut self) {
        let ids = self.layer_order.ids().to_vec();
        for (z_index, id) in ids.iter().enumerate() {
            if let Some(layer) = self.layers.get_mut(id) {
                layer.set_z_index(z_index);
            }
        }
    }

    pub fn data_layer(&self, id: &str) -> Result<&DataLayer, StrataChartError> {
        self.layers
            .get(id)
            .ok_or_else(|| StrataChartError::UnknownLayerId(id.to_string()))
    }

    pub fn data_layer_mut(&mut self, id: &str) -> Result<&mut DataLayer, StrataChartError> {
        self.layers
            .get_mut(id)
            .ok_or_else(|| StrataChartError::UnknownLayerId(id.to_string()))
    }

    /// Layers in the order they were added.
    pub fn data_layers(&self) -> impl Iterator<Item = &DataLayer> {
        self.layers.values()
    }

    /// Layer ids in ascending paint order.
    pub fn layer_ids_by_z_index(&self) -> &[String] {
        self.layer_order.ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(config: Value) -> Panel {
        Panel::new(&config, Arc::new(ChartContext::new())).unwrap()
    }

    #[test]
    fn test_panel_requires_id() {
        let err = Panel::new(&json!({"height": 100}), Arc::new(ChartContext::new())).unwrap_err();
        assert_eq!(err, StrataChartError::MissingPanelId);
    }

    #[test]
    fn test_explicit_z_index_orders_layers() {
        let panel = panel(json!({
            "id": "p1",
            "data_layers": [
                {"id": "d1", "type": "line", "z_index": 1},
                {"id": "d2", "type": "line", "z_index": 0}
            ]
        }));
        assert_eq!(panel.layer_ids_by_z_index(), ["d2", "d1"]);
        assert_eq!(panel.data_layer("d1").unwrap().z_index(), 1);
        assert_eq!(panel.data_layer("d2").unwrap().z_index(), 0);
    }

    #[test]
    fn test_negative_z_index_counts_from_end() {
        let panel = panel(json!({
            "id": "p1",
            "data_layers": [
                {"id": "d1", "type": "line"},
                {"id": "d2", "type": "line"},
                {"id": "d3", "type": "line"},
                {"id": "d4", "type": "line", "z_index": -1}
            ]
        }));
        assert_eq!(panel.layer_ids_by_z_index(), ["d1", "d2", "d4", "d3"]);
        assert_eq!(panel.data_layer("d3").unwrap().z_index(), 3);
        assert_eq!(panel.data_layer("d4").unwrap().z_index(), 2);
    }

    #[test]
    fn test_remove_data_layer_compacts_z_indices() {
        let mut panel = panel(json!({
            "id": "p1",
            "data_layers": [
                {"id": "d1", "type": "line"},
                {"id": "d2", "type": "line"},
                {"id": "d3", "type": "line"}
            ]
        }));
        panel.remove_data_layer("d2").unwrap();
        assert_eq!(panel.layer_ids_by_z_index(), ["d1", "d3"]);
        assert_eq!(panel.data_layer("d3").unwrap().z_index(), 1);
        assert_eq!(
            panel.remove_data_layer("d2").unwrap_err(),
            StrataChartError::UnknownLayerId("d2".to_string())
        );
    }

    #[test]
    fn test_duplicate_layer_id_is_rejected() {
        let mut panel = panel(json!({"id": "p1"}));
        panel.add_data_layer(&json!({"id": "d1"})).unwrap();
        assert_eq!(
            panel.add_data_layer(&json!({"id": "d1"})).unwrap_err(),
            StrataChartError::DuplicateLayerId("d1".to_string())
        );
    }
}
