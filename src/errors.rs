// errors.rs
use crate::domain::EstimateError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors originating from the server logic (routing, malformed requests)
/// or from the estimator behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    /// HTTP status the error is rendered with.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Estimate(e) if e.is_user_error() => 422,
            ServerError::Estimate(_) => 500,
            ServerError::InternalError => 500,
        }
    }
}

/// Deployment errors. Any of these at startup means the process refuses to serve.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveStd { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: String, value: f64 },

    #[error("category registry: {0}")]
    Registry(String),

    #[error("model features do not match the encoder layout: {0}")]
    Schema(String),
}
