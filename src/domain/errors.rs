use thiserror::Error;

/// Failures of a single estimate request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("unknown {field} {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    #[error("{field} {reason}")]
    InvalidRange { field: &'static str, reason: String },

    #[error("feature vector does not match the model: {0}")]
    ShapeMismatch(String),
}

impl EstimateError {
    /// Input errors the user can fix by changing the form. `ShapeMismatch`
    /// is an encoder/model pairing bug and retrying cannot help.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, EstimateError::ShapeMismatch(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EstimateError::InvalidCategory { .. } => "invalid_category",
            EstimateError::InvalidRange { .. } => "invalid_range",
            EstimateError::ShapeMismatch(_) => "shape_mismatch",
        }
    }
}
