use thiserror::Error;

/// Everything that can make a planning call fail.
/// All of these are detected before any bar is filled, so a failed call never yields a partial plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A requirement with a non-positive size, a negative quantity or a non-numeric field
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A stock profile which leaves no usable length on a bar
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A required cut that does not fit on an empty bar
    #[error("cut of size {size} does not fit in the usable bar length of {usable_length}")]
    UnfittableCut { size: f32, usable_length: f32 },
}

impl PlanError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        PlanError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
