//! This module defines all error types used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A transition names a destination that is not a state in the machine
    #[error("unknown destination state `{to}` referenced from `{from}`")]
    UnknownState { from: String, to: String },

    /// Layout options parsing errors
    #[error("layout options error in {file:?}: {message}")]
    LayoutOptions { file: PathBuf, message: String },

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Opaque faults raised by downstream layout/render collaborators
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an unknown-state lookup failure
    pub fn unknown_state(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnknownState {
            from: from.into(),
            to: to.into(),
        }
    }
}
