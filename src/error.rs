//! Error types shared by the network, its configuration and the file loaders.

use thiserror::Error;

/// Errors raised outside the numeric core.
///
/// Forward and backward propagation never fail; everything here comes from
/// configuring a network or feeding it external data.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Unknown activation function: {name}")]
    UnknownActivation { name: String },

    #[error("Invalid network configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Not enough start values: network has {needed} neurons, file provides {found}")]
    MissingStartValues { needed: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
