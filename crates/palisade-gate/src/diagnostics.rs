//! Gate diagnostics
//!
//! Each use-site violation is a single diagnostic tied to the reference's
//! source location. Violations accumulate; they abort successful
//! compilation of the artifact but never the compiler process.

use palisade_decl::Span;
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Kind of use-site violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDiagnosticKind {
    /// Reference to an explicitly-restricted symbol of a participating
    /// producer, outside a permissive context
    ExplicitRestrictionViolation { symbol: String },

    /// Reference to a legacy producer's symbol whose signature contains
    /// restricted types; weaker compatibility wording, recomputed
    /// structurally, never backed by a persisted marker
    CompatibilityViolation { symbol: String },

    /// The updated safety rules are not available at the active language
    /// version
    FeatureNotAvailable { symbol: String },

    /// The producing artifact physically carries a version marker this
    /// compiler does not recognize; attributed to the reference, not to
    /// the artifact
    UnrecognizedMarkerVersion {
        symbol: String,
        marker_type: String,
        expected: u32,
    },

    /// Legacy rule for consumers that opted out of the updated rules:
    /// restricted types require a permissive context
    LegacyUnsafeNeeded { symbol: String },

    /// User source applied a compiler-reserved marker type directly
    ReservedMarker { marker_type: String },
}

impl GateDiagnosticKind {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            GateDiagnosticKind::ExplicitRestrictionViolation { .. } => "E-UNSAFE-001",
            GateDiagnosticKind::CompatibilityViolation { .. } => "E-UNSAFE-002",
            GateDiagnosticKind::FeatureNotAvailable { .. } => "E-UNSAFE-003",
            GateDiagnosticKind::UnrecognizedMarkerVersion { .. } => "E-UNSAFE-004",
            GateDiagnosticKind::LegacyUnsafeNeeded { .. } => "E-UNSAFE-005",
            GateDiagnosticKind::ReservedMarker { .. } => "E-UNSAFE-006",
        }
    }
}

/// A use-site diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: GateDiagnosticKind,
    /// Location of the offending reference
    pub span: Span,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(kind: GateDiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            severity: Severity::Error,
        }
    }

    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The primary message for this diagnostic
    pub fn message(&self) -> String {
        match &self.kind {
            GateDiagnosticKind::ExplicitRestrictionViolation { symbol } => format!(
                "`{}` must be used in a permissive context because it is marked restricted or externally implemented",
                symbol
            ),
            GateDiagnosticKind::CompatibilityViolation { symbol } => format!(
                "`{}` must be used in a permissive context because it has restricted types in its signature",
                symbol
            ),
            GateDiagnosticKind::FeatureNotAvailable { symbol } => format!(
                "`{}` requires the updated safety rules, which are not available at this language version",
                symbol
            ),
            GateDiagnosticKind::UnrecognizedMarkerVersion { symbol, marker_type, expected } => {
                format!(
                    "`{}` is defined in an artifact with an unrecognized `{}` version, expecting '{}'",
                    symbol, marker_type, expected
                )
            }
            GateDiagnosticKind::LegacyUnsafeNeeded { symbol } => format!(
                "`{}` uses restricted types and may only be used in a permissive context",
                symbol
            ),
            GateDiagnosticKind::ReservedMarker { marker_type } => format!(
                "do not use `{}`: it is reserved for compiler usage",
                marker_type
            ),
        }
    }

    /// Format the diagnostic as a simple string
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.code(), self.message())
    }
}
