//! Palisade - memory-safety gating for separately compiled artifacts
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use palisade_artifact as artifact;
pub use palisade_classify as classify;
pub use palisade_decl as decl;
pub use palisade_gate as gate;
