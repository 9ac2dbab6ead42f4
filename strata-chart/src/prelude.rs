//! Convenience re-exports for building and laying out charts.

pub use crate::context::ChartContext;
pub use crate::error::StrataChartError;
pub use crate::kinds::{DataLayerKind, DataLayerKindRegistry, RenderMark};
pub use crate::layer::DataLayer;
pub use crate::panel::{Panel, Point};
pub use crate::plot::{Dimension, Plot, PROPORTIONAL_TOLERANCE};
pub use crate::predicates::{StatusPredicate, TooltipBehavior};
pub use crate::state::{ElementState, ElementStatus};

pub use strata_layout::{merge, OrderedIds, StrataLayoutError};
pub use strata_scales::{
    axis_extent, parse_position_query, position_int_to_string, position_string_to_int,
    pretty_ticks, resolve_scalable_parameter, Axis, AxisConfig, AxisExtent, ClipRange,
    PositionQuery, ScaleFn, ScaleFunctionRegistry, StrataScaleError,
};
