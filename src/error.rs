use crate::types::{FeatureId, HypothesisId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("hypothesis score must not be NaN.")]
    NanScore,

    #[error("feature {feature:?} has no state attached to the hypothesis.")]
    MissingState { feature: String },

    #[error("feature {feature:?} expects state type {expected}, got {actual}.")]
    StateTypeMismatch {
        feature: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("feature id {0:?} is not registered in this feature set.")]
    UnknownFeature(FeatureId),

    #[error("parent hypothesis {0:?} is not in the arena.")]
    UnknownParent(HypothesisId),

    #[error("{what} exceeded id capacity.")]
    CapacityExceeded { what: &'static str },

    #[error("beam_width must be greater than or equal to 1.")]
    InvalidBeamWidth,
}

pub type Result<T, E = StackError> = std::result::Result<T, E>;
