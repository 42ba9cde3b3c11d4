//! Palisade artifact markers
//!
//! The cross-compilation half of the safety analysis: deciding whether a
//! referenced artifact participates in the updated safety rules (from its
//! embedded version markers), and synthesizing the markers embedded when
//! producing an artifact. Markers are small, versioned, and compiler-private;
//! they let the rules evolve without recompiling a whole dependency graph.

mod version;
mod markers;
mod synthesize;
mod reader;
mod error;

pub use version::*;
pub use markers::*;
pub use synthesize::*;
pub use reader::*;
pub use error::*;

/// The rules version this compiler recognizes in version markers
pub const RULES_VERSION: u32 = 2;

/// Fully-qualified name of the artifact-level version marker type
pub const VERSION_MARKER_TYPE: &str = "core.runtime.SafetyRulesMarker";

/// Fully-qualified name of the per-symbol safety marker type
pub const SYMBOL_MARKER_TYPE: &str = "core.runtime.RequiresUnsafeMarker";
