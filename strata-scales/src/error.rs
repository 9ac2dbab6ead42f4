#[derive(Debug, PartialEq, thiserror::Error)]
pub enum StrataScaleError {
    #[error("Scale function not registered: `{0}`")]
    UnknownScaleFunction(String),

    #[error("Scale function already registered: `{0}`")]
    DuplicateScaleFunction(String),

    #[error("Invalid axis identifier: `{0}`")]
    InvalidAxis(String),
}
