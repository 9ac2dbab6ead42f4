use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::StrataScaleError;
use crate::utils::coerce_numeric;

/// The closed set of axis identifiers a data layer can scale against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y1,
    Y2,
}

impl Axis {
    pub fn parse(identifier: &str) -> Result<Self, StrataScaleError> {
        match identifier {
            "x" => Ok(Axis::X),
            "y1" => Ok(Axis::Y1),
            "y2" => Ok(Axis::Y2),
            other => Err(StrataScaleError::InvalidAxis(other.to_string())),
        }
    }

    /// Key of the per-axis subtree in a data layer's layout.
    pub fn layout_key(&self) -> &'static str {
        match self {
            Axis::X => "x_axis",
            Axis::Y1 => "y1_axis",
            Axis::Y2 => "y2_axis",
        }
    }
}

/// Per-axis extent configuration, decoded from a layer's `{axis}_axis`
/// layout subtree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AxisConfig {
    pub field: Option<String>,
    pub lower_buffer: Option<f64>,
    pub upper_buffer: Option<f64>,
    pub min_extent: Option<Vec<f64>>,
    pub floor: Option<f64>,
    pub ceiling: Option<f64>,
}

/// `[lower, upper]`; both `None` when the configured field holds no numeric
/// values in any record.
pub type AxisExtent = [Option<f64>; 2];

/// Compute the numeric range for an axis from a layer's records.
///
/// Buffers scale by the raw span, `min_extent` can only widen the result,
/// and a configured floor or ceiling pins the corresponding bound outright
/// (both configured: the data is not consulted at all). A floor above a
/// ceiling passes through uncorrected.
pub fn axis_extent(records: &[Map<String, Value>], config: &AxisConfig) -> AxisExtent {
    if let (Some(floor), Some(ceiling)) = (config.floor, config.ceiling) {
        return [Some(floor), Some(ceiling)];
    }

    let Some(field) = config.field.as_deref() else {
        return [None, None];
    };
    let mut lower = f64::INFINITY;
    let mut upper = f64::NEG_INFINITY;
    let mut seen = false;
    for record in records {
        if let Some(value) = record.get(field).and_then(coerce_numeric) {
            lower = lower.min(value);
            upper = upper.max(value);
            seen = true;
        }
    }
    if !seen {
        return [None, None];
    }

    let span = upper - lower;
    if let Some(buffer) = config.lower_buffer {
        lower -= span * buffer;
    }
    if let Some(buffer) = config.upper_buffer {
        upper += span * buffer;
    }

    if let Some(min_extent) = config.min_extent.as_deref() {
        if let [lo, hi] = *min_extent {
            lower = lower.min(lo);
            upper = upper.max(hi);
        }
    }

    if let Some(floor) = config.floor {
        lower = floor;
    }
    if let Some(ceiling) = config.ceiling {
        upper = ceiling;
    }

    [Some(lower), Some(upper)]
}
