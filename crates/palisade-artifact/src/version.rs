//! Rules-version resolution
//!
//! A consumed artifact participates in the updated safety rules iff the
//! first version marker of the recognizable constructor shape carries
//! exactly the version this compiler expects. Everything else — absent
//! markers, wrong shapes, wrong versions — degrades to non-participation;
//! the distinction between "absent" and "present but unrecognized" is kept
//! because the gatekeeper reports the latter at use sites.

use palisade_decl::{AppliedVersionMarker, Artifact, ArtifactId, ArtifactTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::RULES_VERSION;

/// How an artifact's version markers were recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recognition {
    /// No version marker applied at all
    Absent,
    /// At least one marker physically present, but none recognized
    /// (wrong constructor shape, or a version this compiler does not know)
    Unrecognized,
    /// The governing marker carries the expected version
    Recognized,
}

/// Result of resolving an artifact's rules participation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// Whether the artifact opts into the updated rules
    pub participates: bool,
    /// The governing marker's version, when one had the recognizable shape
    pub version: Option<u32>,
    /// Marker presence, for use-site reporting
    pub recognition: Recognition,
}

impl Participation {
    /// Participation of an artifact with no markers (legacy)
    pub fn legacy() -> Self {
        Self {
            participates: false,
            version: None,
            recognition: Recognition::Absent,
        }
    }

    /// Participation of an artifact carrying the current version marker
    pub fn current() -> Self {
        Self {
            participates: true,
            version: Some(RULES_VERSION),
            recognition: Recognition::Recognized,
        }
    }
}

/// Resolve an artifact's rules participation from its applied markers
///
/// First marker of the recognizable (single-int) shape wins; later markers
/// are ignored and cannot clear recognition established by the first.
/// Shape-mismatched markers never govern, regardless of payload.
pub fn resolve(artifact: &Artifact) -> Participation {
    let mut any_present = false;

    for marker in &artifact.version_markers {
        any_present = true;
        if let AppliedVersionMarker::Versioned(version) = marker {
            let participates = *version == RULES_VERSION;
            return Participation {
                participates,
                version: Some(*version),
                recognition: if participates {
                    Recognition::Recognized
                } else {
                    Recognition::Unrecognized
                },
            };
        }
    }

    Participation {
        participates: false,
        version: None,
        recognition: if any_present {
            Recognition::Unrecognized
        } else {
            Recognition::Absent
        },
    }
}

/// Memoized participation lookups for one compilation
///
/// Resolution is deterministic and pure, so compute-and-store-if-absent is
/// enough; resolving the same artifact twice must (and does) agree.
#[derive(Debug, Clone, Default)]
pub struct ParticipationCache {
    entries: HashMap<ArtifactId, Participation>,
}

impl ParticipationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve with memoization; unknown artifacts resolve as legacy
    pub fn resolve(&mut self, table: &ArtifactTable, id: ArtifactId) -> Participation {
        if let Some(cached) = self.entries.get(&id) {
            return *cached;
        }
        let resolved = match table.get(id) {
            Some(artifact) => resolve(artifact),
            None => Participation::legacy(),
        };
        self.entries.insert(id, resolved);
        resolved
    }

    /// Resolve for a type that may be forwarded: the forwarded-to
    /// artifact's own markers govern, not the forwarding artifact's
    pub fn resolve_for_type(
        &mut self,
        table: &ArtifactTable,
        id: ArtifactId,
        type_name: &str,
    ) -> Participation {
        let target = follow_type_forwards(table, id, type_name);
        self.resolve(table, target)
    }
}

/// Chase a type-forward chain to the artifact that actually defines the
/// type. Bounded walk: forward chains are short, and a cycle in metadata
/// must not hang the compiler.
pub fn follow_type_forwards(table: &ArtifactTable, mut id: ArtifactId, type_name: &str) -> ArtifactId {
    for _ in 0..16 {
        match table.get(id).and_then(|a| a.type_forwards.get(type_name)) {
            Some(next) => id = *next,
            None => break,
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(markers: Vec<AppliedVersionMarker>) -> Artifact {
        let mut a = Artifact::new(ArtifactId(1), "lib");
        a.version_markers = markers;
        a
    }

    #[test]
    fn absent_marker_means_legacy() {
        let p = resolve(&artifact(vec![]));
        assert!(!p.participates);
        assert_eq!(p.version, None);
        assert_eq!(p.recognition, Recognition::Absent);
    }

    #[test]
    fn current_version_participates() {
        let p = resolve(&artifact(vec![AppliedVersionMarker::Versioned(2)]));
        assert!(p.participates);
        assert_eq!(p.version, Some(2));
        assert_eq!(p.recognition, Recognition::Recognized);
    }

    #[test]
    fn first_marker_wins() {
        let p = resolve(&artifact(vec![
            AppliedVersionMarker::Versioned(2),
            AppliedVersionMarker::Versioned(0),
        ]));
        assert!(p.participates);

        let p = resolve(&artifact(vec![
            AppliedVersionMarker::Versioned(0),
            AppliedVersionMarker::Versioned(2),
        ]));
        assert!(!p.participates);
        assert_eq!(p.recognition, Recognition::Unrecognized);
    }

    #[test]
    fn wrong_shape_is_never_recognized() {
        for marker in [
            AppliedVersionMarker::NoArguments,
            AppliedVersionMarker::Text("2".to_string()),
        ] {
            let p = resolve(&artifact(vec![marker]));
            assert!(!p.participates);
            assert_eq!(p.version, None);
            assert_eq!(p.recognition, Recognition::Unrecognized);
        }
    }

    #[test]
    fn shape_mismatch_does_not_shadow_later_recognizable_marker() {
        let p = resolve(&artifact(vec![
            AppliedVersionMarker::NoArguments,
            AppliedVersionMarker::Versioned(2),
        ]));
        assert!(p.participates);
    }

    #[test]
    fn unknown_versions_are_unrecognized() {
        for version in [0, 1, 3, u32::MAX] {
            let p = resolve(&artifact(vec![AppliedVersionMarker::Versioned(version)]));
            assert!(!p.participates);
            assert_eq!(p.version, Some(version));
            assert_eq!(p.recognition, Recognition::Unrecognized);
        }
    }

    #[test]
    fn cache_is_idempotent() {
        let mut table = ArtifactTable::new();
        table.insert(artifact(vec![AppliedVersionMarker::Versioned(2)]));

        let mut cache = ParticipationCache::new();
        let first = cache.resolve(&table, ArtifactId(1));
        let second = cache.resolve(&table, ArtifactId(1));
        assert_eq!(first, second);
        assert!(first.participates);
    }

    #[test]
    fn type_forward_resolves_to_target_artifact() {
        let mut table = ArtifactTable::new();
        // Forwarder is legacy; target participates.
        let forwarder = Artifact::new(ArtifactId(1), "facade")
            .with_type_forward("Buffer", ArtifactId(2));
        let mut target = Artifact::new(ArtifactId(2), "impl");
        target.version_markers = vec![AppliedVersionMarker::Versioned(2)];
        table.insert(forwarder);
        table.insert(target);

        let mut cache = ParticipationCache::new();
        let p = cache.resolve_for_type(&table, ArtifactId(1), "Buffer");
        assert!(p.participates);

        // A type that is not forwarded stays with the facade.
        let p = cache.resolve_for_type(&table, ArtifactId(1), "Other");
        assert!(!p.participates);
    }
}
