//! The classification rules
//!
//! Priority order:
//!   1. explicit restricted modifier -> Explicit
//!   2. externally-implemented, producer participating -> Explicit
//!   3. restricted types in the signature, producer NOT participating -> Implicit
//!   4. otherwise Safe
//!
//! Rule 2's participation condition preserves old behavior for legacy
//! artifacts: there, only explicit modifiers count. Rule 3 is the
//! compatibility classification consumers recompute structurally; it is
//! never persisted.

use palisade_decl::{SymbolDecl, SymbolKind};
use crate::{Safety, UnsafeMode};

/// Classify one symbol declaration. Pure; never fails.
pub fn classify(decl: &SymbolDecl, producer_participates: bool) -> Safety {
    // Compiler-generated members (iterator/async state machines) classify
    // as Safe even inside an explicitly-marked container.
    if decl.is_compiler_generated {
        return Safety::Safe;
    }

    match decl.kind {
        // Lambdas cannot carry the modifier in source and never surface in
        // an artifact under their own name.
        SymbolKind::Lambda => Safety::Safe,

        // Marking a container type is cosmetic: it widens what the type's
        // body may do lexically, but neither the type nor its members gate
        // on it. Members classify from their own modifiers.
        SymbolKind::Type => Safety::Safe,

        // Local functions classify exactly like top-level methods; every
        // other member kind (incl. accessors, which carry their own
        // modifier bit) goes through the same rule chain.
        SymbolKind::Method
        | SymbolKind::Accessor
        | SymbolKind::Property
        | SymbolKind::Indexer
        | SymbolKind::Event
        | SymbolKind::Constructor
        | SymbolKind::Destructor
        | SymbolKind::Operator
        | SymbolKind::Field
        | SymbolKind::LocalFunction => classify_by_rules(decl, producer_participates),
    }
}

fn classify_by_rules(decl: &SymbolDecl, producer_participates: bool) -> Safety {
    if decl.declared_unsafe {
        return Safety::RequiresUnsafe(UnsafeMode::Explicit);
    }

    if decl.is_externally_implemented && producer_participates {
        return Safety::RequiresUnsafe(UnsafeMode::Explicit);
    }

    // Compatibility mode: a legacy producer's symbol is gated by signature
    // shape alone. An externally-implemented legacy symbol with restricted
    // types merges into this same classification.
    if !producer_participates && decl.signature.has_restricted_types() {
        return Safety::RequiresUnsafe(UnsafeMode::Implicit);
    }

    Safety::Safe
}
