// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for configuration loading and collaborator calls

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised at the boundary of the roof generator
#[derive(Error, Debug)]
pub enum ModelError {
    /// Malformed parameter or preset document
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The loft engine rejected a panel
    #[error("Loft failed for {design}: {message}")]
    Loft { design: String, message: String },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ModelError {
    /// Create a loft error
    pub fn loft(design: impl Into<String>, msg: impl Into<String>) -> Self {
        ModelError::Loft {
            design: design.into(),
            message: msg.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ModelError::Other(msg.into())
    }
}
