//! Error types for beat detection

use std::fmt;

/// Errors that can occur during beat detection
#[derive(Debug, Clone)]
pub enum DetectionError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Forward transform error (e.g. block length mismatch)
    TransformError(String),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DetectionError::TransformError(msg) => write!(f, "Transform error: {}", msg),
        }
    }
}

impl std::error::Error for DetectionError {}
