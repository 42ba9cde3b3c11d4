//! Symbol kinds

use serde::{Deserialize, Serialize};

/// Kind of declared symbol
///
/// Closed set: classification and marker attachment match on this
/// exhaustively, so a new kind is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Method,
    /// Property/indexer/event accessor (get, set, add, remove)
    Accessor,
    Property,
    Indexer,
    Event,
    Constructor,
    Destructor,
    Operator,
    Field,
    /// Function declared inside another function body
    LocalFunction,
    /// Anonymous function; cannot carry the restricted modifier in source
    Lambda,
    /// Named type (class/struct/interface); containers for the kinds above
    Type,
}

impl SymbolKind {
    /// Whether a symbol of this kind can be a container for members
    pub fn is_container(self) -> bool {
        matches!(self, SymbolKind::Type)
    }

    /// Whether this kind can carry the explicit restricted modifier in source
    pub fn allows_restricted_modifier(self) -> bool {
        !matches!(self, SymbolKind::Lambda)
    }

    /// Whether a persisted per-symbol marker may attach to this kind
    ///
    /// Markers attach to the concrete emitted member: an accessor gets its
    /// own marker, distinct from its property's, and a local function
    /// carries one on its compiled form. Lambdas never surface in an
    /// artifact under their own name, and marking a type is cosmetic, so
    /// neither kind ever carries one.
    pub fn supports_symbol_marker(self) -> bool {
        match self {
            SymbolKind::Method
            | SymbolKind::Accessor
            | SymbolKind::Property
            | SymbolKind::Indexer
            | SymbolKind::Event
            | SymbolKind::Constructor
            | SymbolKind::Destructor
            | SymbolKind::Operator
            | SymbolKind::Field
            | SymbolKind::LocalFunction => true,
            SymbolKind::Lambda | SymbolKind::Type => false,
        }
    }

    /// Human-readable name used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            SymbolKind::Method => "method",
            SymbolKind::Accessor => "accessor",
            SymbolKind::Property => "property",
            SymbolKind::Indexer => "indexer",
            SymbolKind::Event => "event",
            SymbolKind::Constructor => "constructor",
            SymbolKind::Destructor => "destructor",
            SymbolKind::Operator => "operator",
            SymbolKind::Field => "field",
            SymbolKind::LocalFunction => "local function",
            SymbolKind::Lambda => "lambda",
            SymbolKind::Type => "type",
        }
    }
}

/// Declared visibility of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    /// Visible to friend compilations but not to arbitrary consumers
    Internal,
    Private,
}

impl Visibility {
    /// Whether a symbol with this visibility can be observed from another
    /// artifact (internal counts: friend compilations read markers back)
    pub fn is_externally_reachable(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }
}
