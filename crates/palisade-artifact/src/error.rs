//! Error types for marker synthesis and persistence

use thiserror::Error;

/// Fatal errors while emitting an artifact's markers
#[derive(Debug, Clone, Error)]
pub enum EmitError {
    /// E-MARKER-001: a source-defined marker type is missing the
    /// constructor shape the emitter requires; not recoverable here
    #[error("missing required member: {type_name}.{member}")]
    MissingRequiredMember {
        type_name: String,
        member: String,
    },
}

impl EmitError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            EmitError::MissingRequiredMember { .. } => "E-MARKER-001",
        }
    }
}

/// Errors reading or writing the persisted marker blob
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("marker blob encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("marker dump error: {0}")]
    Dump(#[from] serde_json::Error),
}

pub type MarkerResult<T> = Result<T, MarkerError>;
