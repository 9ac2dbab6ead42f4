use strata_layout::StrataLayoutError;
use strata_scales::StrataScaleError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StrataChartError {
    #[error("Internal error: `{0}`")]
    Internal(String),

    #[error("Plot width and height must be finite positive numbers")]
    InvalidDimensions,

    #[error("Plot aspect_ratio must be a finite positive number")]
    InvalidAspectRatio,

    #[error("Panel configuration requires an `id`")]
    MissingPanelId,

    #[error("Duplicate panel id: `{0}`")]
    DuplicatePanelId(String),

    #[error("Panel not found: `{0}`")]
    UnknownPanelId(String),

    #[error("Data layer configuration requires an `id`")]
    MissingLayerId,

    #[error("Duplicate data layer id: `{0}`")]
    DuplicateLayerId(String),

    #[error("Data layer not found: `{0}`")]
    UnknownLayerId(String),

    #[error("No data layer kind registered for type: `{0}`")]
    UnknownLayerKind(String),

    #[error("Data layer kind already registered: `{0}`")]
    DuplicateLayerKind(String),

    #[error("Invalid status predicate: {0}")]
    InvalidStatusPredicate(String),

    #[error("Layout error: `{0}`")]
    LayoutError(#[from] StrataLayoutError),

    #[error("Scale error: `{0}`")]
    ScaleError(#[from] StrataScaleError),
}
