//! Safety classification values

use serde::{Deserialize, Serialize};

/// Why a symbol requires a permissive context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnsafeMode {
    /// Declared restricted or externally-implemented under a participating
    /// producer; backed by a persisted marker when emitted
    Explicit,
    /// Recomputed structurally by the consumer from the signature of a
    /// legacy (non-participating) producer's symbol; never persisted
    Implicit,
}

/// A symbol's derived safety classification, immutable once computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Safety {
    /// No marker was ever consulted; the default unmarked state.
    /// Equivalent to `Safe` for every decision, kept distinct so
    /// "marker absent" and "marker says safe" are representable.
    None,
    /// No restriction
    Safe,
    /// Must be used inside a permissive context
    RequiresUnsafe(UnsafeMode),
}

impl Safety {
    /// Whether this classification gates use sites at all
    pub fn requires_unsafe(self) -> bool {
        matches!(self, Safety::RequiresUnsafe(_))
    }

    /// The mode, if any restriction applies
    pub fn mode(self) -> Option<UnsafeMode> {
        match self {
            Safety::RequiresUnsafe(mode) => Some(mode),
            Safety::None | Safety::Safe => None,
        }
    }

    /// Human-readable name used in diagnostics and marker dumps
    pub fn describe(self) -> &'static str {
        match self {
            Safety::None => "unmarked",
            Safety::Safe => "safe",
            Safety::RequiresUnsafe(UnsafeMode::Explicit) => "requires-unsafe",
            Safety::RequiresUnsafe(UnsafeMode::Implicit) => "requires-unsafe (compat)",
        }
    }
}
