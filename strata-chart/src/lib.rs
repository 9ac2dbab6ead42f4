pub mod context;
pub mod error;
pub mod kinds;
pub mod layer;
pub mod panel;
pub mod plot;
pub mod predicates;
pub mod prelude;
pub mod state;

pub use context::ChartContext;
pub use error::StrataChartError;
pub use plot::{Dimension, Plot};
