//! Synthesized marker set for one produced artifact
//!
//! The output of marker synthesis, and the shape that round-trips through
//! the artifact's embedded metadata (bincode blob, plus a readable json
//! dump for tooling).

use palisade_decl::{AppliedVersionMarker, Artifact, ArtifactId, MarkerDefSet, SymbolId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::MarkerResult;

/// Where a marker type's definition comes from in the produced artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerDefSource {
    /// The artifact's own source already defines the marker type
    SourceDefined,
    /// Exactly one referenced artifact exposes a usable definition
    External(ArtifactId),
    /// Zero or ambiguously-many external definitions: a private,
    /// compiler-generated definition is embedded in this artifact
    Synthesized,
}

impl MarkerDefSource {
    /// Whether this definition is embedded in the produced artifact itself
    pub fn is_embedded(self) -> bool {
        matches!(self, MarkerDefSource::SourceDefined | MarkerDefSource::Synthesized)
    }
}

/// Definition decisions for the two marker types, when each is needed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerDefPlan {
    pub version_marker: Option<MarkerDefSource>,
    pub symbol_marker: Option<MarkerDefSource>,
}

/// The markers embedded in one produced artifact, immutable once computed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMarkers {
    /// The rules version carried by the artifact-level marker, if emitted
    pub version_marker: Option<u32>,

    /// Symbols carrying the per-symbol safety marker
    pub symbol_markers: BTreeSet<SymbolId>,

    /// Where each needed marker type's definition comes from
    pub definitions: MarkerDefPlan,
}

impl ArtifactMarkers {
    /// The empty marker set: what a non-participating artifact embeds
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.version_marker.is_none() && self.symbol_markers.is_empty()
    }

    /// Encode for embedding in the artifact
    pub fn to_bytes(&self) -> MarkerResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from an artifact's embedded blob
    pub fn from_bytes(bytes: &[u8]) -> MarkerResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Human-readable dump for tooling and test baselines
    pub fn to_json(&self) -> MarkerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the consumed-artifact view a downstream compilation sees.
    ///
    /// Synthesized definitions are private and compiler-generated, so they
    /// are not exported for reuse; only source-defined marker types become
    /// visible definitions to consumers.
    pub fn to_consumed_artifact(
        &self,
        id: ArtifactId,
        name: impl Into<String>,
        source_defs: &MarkerDefSet,
    ) -> Artifact {
        let mut artifact = Artifact::new(id, name);
        if let Some(version) = self.version_marker {
            artifact.version_markers.push(AppliedVersionMarker::Versioned(version));
        }
        artifact.symbol_markers = self.symbol_markers.clone();

        let mut exported = MarkerDefSet::default();
        if self.definitions.version_marker == Some(MarkerDefSource::SourceDefined) {
            exported.version_marker = source_defs.version_marker.clone();
        }
        if self.definitions.symbol_marker == Some(MarkerDefSource::SourceDefined) {
            exported.symbol_marker = source_defs.symbol_marker.clone();
        }
        artifact.exported_marker_defs = exported;
        artifact
    }
}
