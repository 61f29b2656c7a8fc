//! Error types for the Trigon engine
//!
//! This module defines the error types used throughout the engine,
//! covering shader translation, lifecycle misuse, and backend failures.

use std::fmt;

use crate::graphics_device::ShaderStage;

/// Result type for Trigon engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trigon engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A shader stage failed to compile; carries the raw driver diagnostic
    ShaderCompile {
        /// Stage that failed (vertex or fragment)
        stage: ShaderStage,
        /// Info log text reported by the driver
        diagnostic: String,
    },

    /// The shader program failed to link; carries the raw driver diagnostic
    ShaderLink {
        /// Info log text reported by the driver
        diagnostic: String,
    },

    /// An operation was called in the wrong lifecycle state
    /// (render before init, double init, use after destroy)
    InvalidState(String),

    /// Backend-specific error (OpenGL object creation, lost handles, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile { stage, diagnostic } => {
                write!(f, "{} shader compilation failed: {}", stage.name(), diagnostic)
            }
            Error::ShaderLink { diagnostic } => {
                write!(f, "Shader program link failed: {}", diagnostic)
            }
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
