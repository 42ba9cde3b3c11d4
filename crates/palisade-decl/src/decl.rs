//! Symbol declarations
//!
//! The declaration-side facts the classifier reads. These are produced by
//! the surrounding front end (source declarations) or by the metadata
//! importer (foreign artifacts); the analysis never mutates them.

use serde::{Deserialize, Serialize};
use crate::{ArtifactId, Signature, Span, SymbolId, SymbolKind, Visibility};

/// A declared symbol as seen by the safety analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolDecl {
    /// Unique id within the compilation
    pub id: SymbolId,

    /// Display name (e.g. "Buffer.copy_from", "Buffer.data.get")
    pub name: String,

    /// Kind of symbol
    pub kind: SymbolKind,

    /// Source location of the declaration
    pub span: Span,

    /// Artifact this symbol is declared in
    pub artifact: ArtifactId,

    /// Declared visibility
    pub visibility: Visibility,

    /// Explicit restricted-context modifier present on this declaration.
    /// For an accessor this is the accessor's own modifier, not the
    /// property's.
    pub declared_unsafe: bool,

    /// Declared without a body, with a native/foreign calling convention
    pub is_externally_implemented: bool,

    /// Synthesized by the compiler (e.g. iterator state-machine members)
    pub is_compiler_generated: bool,

    /// Signature shape; empty for symbols without one (fields use their
    /// type as the return shape)
    pub signature: Signature,

    /// Containing type, if this is a member
    pub containing_type: Option<SymbolId>,

    /// Whether the containing type carries the explicit restricted modifier
    pub containing_type_declared_unsafe: bool,
}

impl SymbolDecl {
    /// Create a declaration with safe defaults; callers flip the flags
    /// they need
    pub fn new(id: SymbolId, name: impl Into<String>, kind: SymbolKind, artifact: ArtifactId) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            span: Span::dummy(),
            artifact,
            visibility: Visibility::Public,
            declared_unsafe: false,
            is_externally_implemented: false,
            is_compiler_generated: false,
            signature: Signature::empty(),
            containing_type: None,
            containing_type_declared_unsafe: false,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_container(mut self, container: SymbolId, container_unsafe: bool) -> Self {
        self.containing_type = Some(container);
        self.containing_type_declared_unsafe = container_unsafe;
        self
    }

    pub fn declared_unsafe(mut self) -> Self {
        self.declared_unsafe = true;
        self
    }

    pub fn externally_implemented(mut self) -> Self {
        self.is_externally_implemented = true;
        self
    }

    pub fn compiler_generated(mut self) -> Self {
        self.is_compiler_generated = true;
        self
    }
}
