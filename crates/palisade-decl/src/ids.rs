//! Identity newtypes for symbols and artifacts
//!
//! Analysis caches are keyed by these ids, so they are cheap to copy and
//! hash. Ids are assigned by whoever constructs the declaration model
//! (one id space per compilation).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a declared symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Unique identifier for a compiled artifact (own or referenced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym#{}", self.0)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artifact#{}", self.0)
    }
}
