pub mod error;
pub mod extent;
pub mod position;
pub mod registry;
pub mod resolver;
pub mod ticks;
pub mod utils;

pub use error::StrataScaleError;
pub use extent::{axis_extent, Axis, AxisConfig, AxisExtent};
pub use position::{
    parse_position_query, position_int_to_string, position_string_to_int, PositionQuery,
};
pub use registry::{ScaleFn, ScaleFunctionRegistry};
pub use resolver::resolve_scalable_parameter;
pub use ticks::{pretty_ticks, ClipRange};
