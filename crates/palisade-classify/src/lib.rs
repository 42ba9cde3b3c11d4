//! Palisade declaration safety classifier
//!
//! Decides, from declaration syntax alone, whether using a symbol requires
//! a permissive (unsafe) context. Classification is a pure function of the
//! declaration plus one bit of producer state (rules participation); it
//! never fails and has no side effects.

mod safety;
mod classifier;
mod map;
mod cancel;

pub use safety::*;
pub use classifier::*;
pub use map::*;
pub use cancel::*;
