//! Error types

use thiserror::Error;

/// Errors that can occur while setting up verbose logging
///
/// None of these reach logger acquisition: a pattern that fails to compile is
/// skipped, and path resolution always degrades to a best-effort name.
#[derive(Error, Debug)]
pub enum VerboseError {
    /// A token of the enablement spec was rejected by the regex engine
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The runtime context was already derived from another entry path
    #[error("Runtime already initialized from {current:?}, cannot re-initialize from {requested:?}")]
    AlreadyInitialized { current: String, requested: String },
}

impl VerboseError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an already initialized error
    pub fn already_initialized(current: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::AlreadyInitialized {
            current: current.into(),
            requested: requested.into(),
        }
    }
}

pub type VerboseResult<T> = Result<T, VerboseError>;
