//! # Error Types
//!
//! This module defines error types used throughout the cartela library.

use thiserror::Error;

/// Errors raised at the renderer-adapter boundary.
///
/// These never reach the host designer: the render apply step recovers from
/// them locally by substituting format-appropriate fallback content.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Content fails the format's charset/length/checksum rules.
    #[error("invalid content for {format}: {reason}")]
    InvalidContent { format: String, reason: String },

    /// The adapter has no encoder for this format tag.
    #[error("unsupported format: {0}")]
    Unsupported(String),

    /// Image encoding error (PNG export).
    #[error("image error: {0}")]
    Image(String),
}

impl RenderError {
    pub(crate) fn invalid(format: &crate::format::CodeFormat, reason: impl Into<String>) -> Self {
        RenderError::InvalidContent {
            format: format.name().to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors from the property-panel plumbing.
#[derive(Debug, Error)]
pub enum ElementError {
    /// The field name is not one of the element's panel properties.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The value type does not match the property (e.g. a string for `height`).
    #[error("invalid value for property {field}: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },
}

impl ElementError {
    pub(crate) fn invalid_value(field: &str, expected: &'static str) -> Self {
        ElementError::InvalidValue {
            field: field.to_string(),
            expected,
        }
    }
}
