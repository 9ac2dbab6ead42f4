use serde_json::{json, Value};
use strata_scales::Axis;

use crate::error::StrataChartError;
use crate::kinds::{DataLayerKind, RenderMark};
use crate::layer::DataLayer;

/// One mark per record, with scalable point size, shape, and color.
#[derive(Debug, Clone, Copy)]
pub struct ScatterKind;

const SCALABLE_CHANNELS: [&str; 3] = ["point_size", "point_shape", "color"];

impl DataLayerKind for ScatterKind {
    fn default_layout(&self) -> Value {
        json!({
            "type": "scatter",
            "point_size": 40,
            "point_shape": "circle",
            "color": "#888888",
            "y_axis": 1
        })
    }

    fn render(&self, layer: &DataLayer) -> Result<Vec<RenderMark>, StrataChartError> {
        let y_axis = match layer.layout().get("y_axis").and_then(Value::as_i64) {
            Some(2) => Axis::Y2,
            _ => Axis::Y1,
        };
        let mut marks = Vec::with_capacity(layer.data().len());
        for datum in layer.data() {
            let mut mark = RenderMark {
                element_id: layer.element_id(datum),
                x: layer.axis_value(Axis::X, datum),
                y: layer.axis_value(y_axis, datum),
                ..Default::default()
            };
            for channel in SCALABLE_CHANNELS {
                if let Some(spec) = layer.layout().get(channel) {
                    let resolved = layer.resolve_scalable_parameter(spec, datum)?;
                    if !resolved.is_null() {
                        mark.channels.insert(channel.to_string(), resolved);
                    }
                }
            }
            marks.push(mark);
        }
        Ok(marks)
    }
}
