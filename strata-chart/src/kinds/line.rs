use serde_json::{json, Value};
use strata_scales::Axis;

use crate::error::StrataChartError;
use crate::kinds::{DataLayerKind, RenderMark};
use crate::layer::DataLayer;

/// One vertex mark per record in sequence order; styling applies to the
/// whole polyline rather than per datum.
#[derive(Debug, Clone, Copy)]
pub struct LineKind;

impl DataLayerKind for LineKind {
    fn default_layout(&self) -> Value {
        json!({
            "type": "line",
            "style": {
                "fill": "none",
                "stroke": "#0000ff",
                "stroke-width": "2px",
                "stroke-opacity": "1"
            },
            "interpolate": "linear",
            "y_axis": 1
        })
    }

    fn render(&self, layer: &DataLayer) -> Result<Vec<RenderMark>, StrataChartError> {
        let y_axis = match layer.layout().get("y_axis").and_then(Value::as_i64) {
            Some(2) => Axis::Y2,
            _ => Axis::Y1,
        };
        let mut channels = serde_json::Map::new();
        for key in ["style", "interpolate"] {
            if let Some(value) = layer.layout().get(key) {
                channels.insert(key.to_string(), value.clone());
            }
        }
        Ok(layer
            .data()
            .iter()
            .map(|datum| RenderMark {
                element_id: layer.element_id(datum),
                x: layer.axis_value(Axis::X, datum),
                y: layer.axis_value(y_axis, datum),
                channels: channels.clone(),
            })
            .collect())
    }
}
