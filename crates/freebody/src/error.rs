//! Error types for Freebody operations.
//!
//! [`FreebodyError`] wraps every error condition that can occur between
//! receiving a problem statement and writing the diagram out. Scene-type
//! mismatches are not errors: they are reported through
//! [`RenderOutcome::Unsupported`](crate::RenderOutcome::Unsupported).

use std::io;

use thiserror::Error;

use crate::render::RenderError;

/// The main error type for Freebody operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the JSON document it failed on, so callers can
/// point at the offending line and column.
#[derive(Debug, Error)]
pub enum FreebodyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid scene description: {err}")]
    Scene { err: serde_json::Error, src: String },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Problem statement is empty")]
    MissingInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl FreebodyError {
    /// Create a new `Scene` error with the associated JSON source.
    pub fn new_scene_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Scene {
            err,
            src: src.into(),
        }
    }
}
