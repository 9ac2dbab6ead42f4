pub mod error;
pub mod merge;
pub mod ordering;

pub use error::StrataLayoutError;
pub use merge::merge;
pub use ordering::OrderedIds;
