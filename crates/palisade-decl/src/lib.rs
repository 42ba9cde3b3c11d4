//! Palisade declaration model - input types for safety analysis
//!
//! This crate defines the declaration-side view the safety analysis works
//! on: symbol declarations with their modifiers and signature shapes, and
//! artifact descriptions with their embedded markers. It carries no
//! analysis logic of its own.

mod span;
mod ids;
mod kind;
mod types;
mod decl;
mod artifact;

pub use span::*;
pub use ids::*;
pub use kind::*;
pub use types::*;
pub use decl::*;
pub use artifact::*;
