//! Error types for laminate stiffness calculations

use thiserror::Error;

/// Main error type for laminate operations
#[derive(Error, Debug)]
pub enum LaminateError {
    #[error("Invalid input{}: {}", entry_suffix(.index), .reason)]
    InvalidInput {
        /// Position of the offending stacking entry, if the problem is tied to one
        index: Option<usize>,
        reason: String,
    },

    #[error("Singular stress transformation matrix at angle {angle} degrees")]
    SingularTransform { angle: f64 },

    #[error("Ply '{0}' not found in layup definition")]
    PlyNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

fn entry_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at layup entry {}", i),
        None => String::new(),
    }
}

impl LaminateError {
    /// Invalid input attributed to the layup entry at `index`
    pub fn invalid_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Invalid input concerning the layup as a whole
    pub fn invalid_layup(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            index: None,
            reason: reason.into(),
        }
    }
}

/// Result type for laminate operations
pub type LaminateResult<T> = Result<T, LaminateError>;
