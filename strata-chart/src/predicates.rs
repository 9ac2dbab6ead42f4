use serde_json::Value;

use crate::error::StrataChartError;
use crate::state::{ElementState, ElementStatus};

/// Leaf vocabulary of a status predicate tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLeaf {
    Highlighted,
    Unhighlighted,
    Selected,
    Unselected,
}

impl StatusLeaf {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "highlighted" => Some(Self::Highlighted),
            "unhighlighted" => Some(Self::Unhighlighted),
            "selected" => Some(Self::Selected),
            "unselected" => Some(Self::Unselected),
            _ => None,
        }
    }
}

/// A boolean predicate over an element's live interaction state: leaves from
/// the closed status vocabulary combined with `{and: [...]}` / `{or: [...]}`
/// nodes. Evaluated on each interaction event; no dynamic code involved.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPredicate {
    Leaf(StatusLeaf),
    And(Vec<StatusPredicate>),
    Or(Vec<StatusPredicate>),
}

impl StatusPredicate {
    /// Decode a predicate tree from its layout representation.
    pub fn from_value(value: &Value) -> Result<Self, StrataChartError> {
        match value {
            Value::String(name) => StatusLeaf::parse(name).map(Self::Leaf).ok_or_else(|| {
                StrataChartError::InvalidStatusPredicate(format!("unknown status `{name}`"))
            }),
            Value::Object(node) => {
                let (combinator, children) = if let Some(children) = node.get("and") {
                    ("and", children)
                } else if let Some(children) = node.get("or") {
                    ("or", children)
                } else {
                    return Err(StrataChartError::InvalidStatusPredicate(
                        "object node must have an `and` or `or` key".to_string(),
                    ));
                };
                let children = children.as_array().ok_or_else(|| {
                    StrataChartError::InvalidStatusPredicate(format!(
                        "`{combinator}` must hold an array"
                    ))
                })?;
                let parsed = children
                    .iter()
                    .map(Self::from_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(match combinator {
                    "and" => Self::And(parsed),
                    _ => Self::Or(parsed),
                })
            }
            other => Err(StrataChartError::InvalidStatusPredicate(format!(
                "expected a status name or combinator object, got {other}"
            ))),
        }
    }

    pub fn evaluate(&self, state: &ElementState, element_id: &str) -> bool {
        match self {
            Self::Leaf(StatusLeaf::Highlighted) => {
                state.has(ElementStatus::Highlighted, element_id)
            }
            Self::Leaf(StatusLeaf::Unhighlighted) => {
                !state.has(ElementStatus::Highlighted, element_id)
            }
            Self::Leaf(StatusLeaf::Selected) => state.has(ElementStatus::Selected, element_id),
            Self::Leaf(StatusLeaf::Unselected) => !state.has(ElementStatus::Selected, element_id),
            Self::And(children) => children.iter().all(|c| c.evaluate(state, element_id)),
            Self::Or(children) => children.iter().any(|c| c.evaluate(state, element_id)),
        }
    }
}

/// A layer's tooltip visibility rules: the tooltip for an element displays
/// when the `show` tree passes and the `hide` tree does not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipBehavior {
    pub show: Option<StatusPredicate>,
    pub hide: Option<StatusPredicate>,
}

impl TooltipBehavior {
    /// Decode from a layer's `tooltip` layout subtree. A missing or
    /// non-object subtree means no tooltip rules at all.
    pub fn from_layout(tooltip: Option<&Value>) -> Result<Self, StrataChartError> {
        let Some(Value::Object(node)) = tooltip else {
            return Ok(Self::default());
        };
        let decode = |key: &str| -> Result<Option<StatusPredicate>, StrataChartError> {
            node.get(key)
                .map(StatusPredicate::from_value)
                .transpose()
        };
        Ok(Self {
            show: decode("show")?,
            hide: decode("hide")?,
        })
    }

    pub fn should_show(&self, state: &ElementState, element_id: &str) -> bool {
        let show = self
            .show
            .as_ref()
            .is_some_and(|p| p.evaluate(state, element_id));
        let hide = self
            .hide
            .as_ref()
            .is_some_and(|p| p.evaluate(state, element_id));
        show && !hide
    }
}
