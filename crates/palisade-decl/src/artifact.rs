//! Artifact descriptions
//!
//! Two views of a compiled artifact:
//!
//! - [`Artifact`]: a *consumed* artifact, as the metadata importer hands it
//!   to the analysis — its applied version markers in declaration order,
//!   its per-symbol marker set, and its type-forward table.
//! - [`ArtifactBuild`]: the artifact being *produced*, which the marker
//!   synthesizer runs over once after classification is frozen.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use crate::{ArtifactId, SymbolDecl, SymbolId};

/// A version marker as physically applied to an artifact
///
/// Only the single-int constructor shape can ever be recognized; the other
/// shapes exist so malformed metadata is representable (the resolver treats
/// them as present-but-unrecognized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedVersionMarker {
    /// Single-integer constructor: the only recognizable shape
    Versioned(u32),
    /// Zero-argument constructor; never recognized
    NoArguments,
    /// String-argument constructor; never recognized regardless of payload
    Text(String),
}

/// Constructor shapes a marker type definition offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerCtorShape {
    /// `(version: int)` — required by the version marker type
    IntVersion,
    /// `()` — required by the per-symbol marker type
    NoArguments,
    /// `(text: string)` — never a required shape
    Text,
}

/// A marker *type definition* visible in source or in a referenced artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerTypeDef {
    /// Fully-qualified name of the marker type
    pub name: String,
    /// Constructor shapes the definition offers
    pub ctors: Vec<MarkerCtorShape>,
}

impl MarkerTypeDef {
    pub fn new(name: impl Into<String>, ctors: Vec<MarkerCtorShape>) -> Self {
        Self { name: name.into(), ctors }
    }

    pub fn has_ctor(&self, shape: MarkerCtorShape) -> bool {
        self.ctors.contains(&shape)
    }
}

/// Marker type definitions an artifact carries (in source, or exported
/// for reuse by consumers)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerDefSet {
    /// Definition of the artifact-level version marker type
    pub version_marker: Option<MarkerTypeDef>,
    /// Definition of the per-symbol safety marker type
    pub symbol_marker: Option<MarkerTypeDef>,
}

impl MarkerDefSet {
    pub fn is_empty(&self) -> bool {
        self.version_marker.is_none() && self.symbol_marker.is_none()
    }
}

/// A referenced (already-compiled) artifact as seen by a consumer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,

    /// Version markers physically applied, in declaration order
    pub version_markers: Vec<AppliedVersionMarker>,

    /// Symbols carrying the persisted per-symbol safety marker
    pub symbol_markers: BTreeSet<SymbolId>,

    /// Type forwards: a type named here actually lives in another artifact,
    /// whose own markers govern its members
    pub type_forwards: BTreeMap<String, ArtifactId>,

    /// Marker type definitions this artifact exports for reuse
    pub exported_marker_defs: MarkerDefSet,
}

impl Artifact {
    pub fn new(id: ArtifactId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version_markers: Vec::new(),
            symbol_markers: BTreeSet::new(),
            type_forwards: BTreeMap::new(),
            exported_marker_defs: MarkerDefSet::default(),
        }
    }

    pub fn with_version_marker(mut self, marker: AppliedVersionMarker) -> Self {
        self.version_markers.push(marker);
        self
    }

    pub fn with_symbol_marker(mut self, symbol: SymbolId) -> Self {
        self.symbol_markers.insert(symbol);
        self
    }

    pub fn with_type_forward(mut self, type_name: impl Into<String>, to: ArtifactId) -> Self {
        self.type_forwards.insert(type_name.into(), to);
        self
    }

    pub fn with_exported_marker_defs(mut self, defs: MarkerDefSet) -> Self {
        self.exported_marker_defs = defs;
        self
    }

    /// Whether the given symbol carries the persisted safety marker
    pub fn has_symbol_marker(&self, symbol: SymbolId) -> bool {
        self.symbol_markers.contains(&symbol)
    }
}

/// Lookup table for all referenced artifacts in a compilation
#[derive(Debug, Clone, Default)]
pub struct ArtifactTable {
    artifacts: HashMap<ArtifactId, Artifact>,
}

impl ArtifactTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.id, artifact);
    }

    pub fn get(&self, id: ArtifactId) -> Option<&Artifact> {
        self.artifacts.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }
}

/// The artifact currently being produced
#[derive(Debug, Clone)]
pub struct ArtifactBuild {
    pub id: ArtifactId,
    pub name: String,

    /// All symbols declared in this artifact
    pub symbols: Vec<SymbolDecl>,

    /// Whether there is a compiled unit to attach the artifact-level
    /// version marker to; false only for a degenerate empty unit
    pub has_module_container: bool,

    /// Marker type definitions present in this artifact's own source
    pub local_marker_defs: MarkerDefSet,

    /// Artifacts this compilation references (definition-reuse candidates)
    pub references: Vec<ArtifactId>,
}

impl ArtifactBuild {
    pub fn new(id: ArtifactId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            symbols: Vec::new(),
            has_module_container: true,
            local_marker_defs: MarkerDefSet::default(),
            references: Vec::new(),
        }
    }

    pub fn with_symbol(mut self, symbol: SymbolDecl) -> Self {
        self.symbols.push(symbol);
        self
    }

    pub fn with_reference(mut self, artifact: ArtifactId) -> Self {
        self.references.push(artifact);
        self
    }

    pub fn with_local_marker_defs(mut self, defs: MarkerDefSet) -> Self {
        self.local_marker_defs = defs;
        self
    }

    pub fn without_module_container(mut self) -> Self {
        self.has_module_container = false;
        self
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolDecl> {
        self.symbols.iter().find(|s| s.id == id)
    }
}
