//! Error types for starter-kit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised while running a forward pass.
///
/// The prediction endpoint reports these in the response body instead of
/// through the HTTP status, so the `Display` text is part of the wire format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("expected {expected} input features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("weight has {rows} output rows but bias has {bias} entries")]
    ParameterMismatch { rows: usize, bias: usize },

    #[error("input value at index {index} is not finite")]
    NonFiniteInput { index: usize },

    #[error("model produced a non-finite output")]
    NonFiniteOutput,
}
