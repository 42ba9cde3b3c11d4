//! Palisade use-site gatekeeper
//!
//! The enforcement half of the safety analysis: at every symbol reference,
//! combine the target's classification (direct for own-artifact symbols,
//! marker-resolved for foreign ones), the reference context's
//! permissiveness, and the consuming compilation's own rules state, and
//! either pass or raise one diagnostic at the reference location.

mod diagnostics;
mod context;
mod gate;

pub use diagnostics::*;
pub use context::*;
pub use gate::*;
