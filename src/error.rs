//! Error types for tinsel.
//!
//! Every fallible operation returns `Result<T, CardError>` instead of
//! panicking. A broken page skeleton surfaces here rather than as a host
//! exception.

use thiserror::Error;

/// Result type alias for tinsel operations.
pub type CardResult<T> = Result<T, CardError>;

/// Unified error type for all tinsel operations.
#[derive(Debug, Error)]
pub enum CardError {
    // ===== Surface Errors =====
    /// A required element is absent from the document.
    #[error("Surface: required element '#{id}' not found")]
    MissingElement {
        /// Element id that was looked up.
        id: String,
    },

    /// Host-side document failure (e.g. a rejected DOM call).
    #[error("Surface error: {0}")]
    Surface(String),

    // ===== Placement Errors =====
    /// Vertical offset outside the banding table.
    #[error("Placement: top offset {top}px is outside the banding table")]
    OutOfBand {
        /// Offending vertical offset.
        top: i32,
    },

    /// Vertical band whose lower bound lies below its upper bound.
    #[error("Placement: band [{y_min}, {y_max}] is inverted")]
    InvertedBand {
        /// Requested lowest `top`.
        y_min: i32,
        /// Requested highest `top`.
        y_max: i32,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CardError {
    /// Create a missing-element error.
    #[must_use]
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Create a surface error with a message.
    #[must_use]
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface(message.into())
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error comes from a misconfigured page skeleton.
    #[must_use]
    pub const fn is_surface_fault(&self) -> bool {
        matches!(self, Self::MissingElement { .. } | Self::Surface(_))
    }
}
