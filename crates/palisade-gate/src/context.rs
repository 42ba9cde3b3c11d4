//! Analysis context
//!
//! All per-compilation cached state lives in one explicit context object
//! passed to every component call — no ambient globals — so concurrent
//! multi-artifact builds each own an independent, trivially reentrant
//! context.

use palisade_artifact::{Participation, ParticipationCache, RULES_VERSION};
use palisade_classify::{CancelFlag, ClassificationMap};
use palisade_decl::{ArtifactId, ArtifactTable};

/// Per-compilation state for the safety analysis
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// The artifact being compiled
    pub own_artifact: ArtifactId,

    /// Whether this compilation requested the updated rules
    pub updated_rules_requested: bool,

    /// Whether the updated rules are available at the active language
    /// version, independent of whether they were requested
    pub language_gate_open: bool,

    /// The version constant this compiler recognizes
    pub expected_version: u32,

    /// All referenced artifacts, as imported from metadata
    pub artifacts: ArtifactTable,

    /// Memoized rules-participation per referenced artifact
    pub participation: ParticipationCache,

    /// Frozen per-symbol classifications for the own artifact
    pub classifications: ClassificationMap,

    /// Cooperative cancellation for the enclosing compilation
    pub cancel: CancelFlag,
}

impl AnalysisContext {
    pub fn new(own_artifact: ArtifactId) -> Self {
        Self {
            own_artifact,
            updated_rules_requested: false,
            language_gate_open: true,
            expected_version: RULES_VERSION,
            artifacts: ArtifactTable::new(),
            participation: ParticipationCache::new(),
            classifications: ClassificationMap::new(),
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_updated_rules(mut self, requested: bool) -> Self {
        self.updated_rules_requested = requested;
        self
    }

    pub fn with_language_gate(mut self, open: bool) -> Self {
        self.language_gate_open = open;
        self
    }

    /// Whether the artifact being produced participates in the updated
    /// rules: they must be requested and available
    pub fn own_participates(&self) -> bool {
        self.updated_rules_requested && self.language_gate_open
    }

    /// Resolve a foreign artifact's participation, following a type
    /// forward for the given top-level type name
    pub fn resolve_producer(&mut self, artifact: ArtifactId, type_name: &str) -> Participation {
        self.participation
            .resolve_for_type(&self.artifacts, artifact, type_name)
    }
}
