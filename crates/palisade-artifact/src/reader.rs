//! Metadata reader capability split
//!
//! The per-symbol safety markers are physically present in the artifact but
//! compiler-private: the generic "markers on a symbol" query used by
//! reflection-style consumers must never surface them. The internal channel
//! is a separate, dedicated query so the two can never be conflated by
//! sharing a code path.

use palisade_decl::SymbolId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::{ArtifactMarkers, SYMBOL_MARKER_TYPE, VERSION_MARKER_TYPE};

/// An ordinary user-attached marker recorded in artifact metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMarker {
    /// Fully-qualified marker type name
    pub type_name: String,
    /// Constructor arguments, rendered
    pub args: Vec<String>,
}

impl UserMarker {
    pub fn new(type_name: impl Into<String>, args: Vec<String>) -> Self {
        Self { type_name: type_name.into(), args }
    }

    /// Whether this marker is one of the compiler-private safety markers
    pub fn is_compiler_private(&self) -> bool {
        self.type_name == SYMBOL_MARKER_TYPE || self.type_name == VERSION_MARKER_TYPE
    }
}

/// User-visible marker query over an artifact's metadata
pub trait MetadataReader {
    /// All markers on a symbol that user code may observe. The safety
    /// markers are filtered out even though they are physically present.
    fn markers_on(&self, symbol: SymbolId) -> Vec<UserMarker>;
}

/// An emitted artifact's metadata: the physical marker records plus the
/// compiler-private safety channel
#[derive(Debug, Clone, Default)]
pub struct EmittedMetadata {
    physical: HashMap<SymbolId, Vec<UserMarker>>,
    safety: ArtifactMarkers,
}

impl EmittedMetadata {
    /// Assemble metadata from user markers and the synthesized safety set.
    /// The safety markers are also materialized into the physical records,
    /// since they really are written to the artifact.
    pub fn new(user_markers: HashMap<SymbolId, Vec<UserMarker>>, safety: ArtifactMarkers) -> Self {
        let mut physical = user_markers;
        for symbol in &safety.symbol_markers {
            physical
                .entry(*symbol)
                .or_default()
                .push(UserMarker::new(SYMBOL_MARKER_TYPE, Vec::new()));
        }
        Self { physical, safety }
    }

    /// The raw physical records, including compiler-private markers.
    /// This is the artifact-writer's view, not a user query.
    pub fn physical_markers_on(&self, symbol: SymbolId) -> &[UserMarker] {
        self.physical.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dedicated internal query: whether the symbol carries the persisted
    /// safety marker. This is the only way to observe it.
    pub fn safety_marker_on(&self, symbol: SymbolId) -> bool {
        self.safety.symbol_markers.contains(&symbol)
    }

    /// The embedded version marker, if any (internal query)
    pub fn version_marker(&self) -> Option<u32> {
        self.safety.version_marker
    }
}

impl MetadataReader for EmittedMetadata {
    fn markers_on(&self, symbol: SymbolId) -> Vec<UserMarker> {
        self.physical_markers_on(symbol)
            .iter()
            .filter(|m| !m.is_compiler_private())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RULES_VERSION;

    fn metadata_with_marked_symbol() -> EmittedMetadata {
        let mut safety = ArtifactMarkers::empty();
        safety.version_marker = Some(RULES_VERSION);
        safety.symbol_markers.insert(SymbolId(1));

        let mut user = HashMap::new();
        user.insert(
            SymbolId(1),
            vec![UserMarker::new("app.Deprecated", vec!["use M2".to_string()])],
        );
        EmittedMetadata::new(user, safety)
    }

    #[test]
    fn safety_markers_are_physically_present() {
        let meta = metadata_with_marked_symbol();
        let physical = meta.physical_markers_on(SymbolId(1));
        assert!(physical.iter().any(|m| m.type_name == SYMBOL_MARKER_TYPE));
    }

    #[test]
    fn user_query_never_surfaces_safety_markers() {
        let meta = metadata_with_marked_symbol();
        let visible = meta.markers_on(SymbolId(1));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].type_name, "app.Deprecated");
    }

    #[test]
    fn internal_query_observes_safety_markers() {
        let meta = metadata_with_marked_symbol();
        assert!(meta.safety_marker_on(SymbolId(1)));
        assert!(!meta.safety_marker_on(SymbolId(2)));
        assert_eq!(meta.version_marker(), Some(RULES_VERSION));
    }
}
