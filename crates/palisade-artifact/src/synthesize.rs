//! Marker synthesis
//!
//! Runs once per produced artifact, after classification is frozen. A
//! non-participating artifact embeds nothing, no matter how many symbols
//! classify as restricted; a participating one embeds exactly one version
//! marker plus a per-symbol marker for every externally-reachable
//! explicitly-restricted symbol.

use palisade_classify::{CancelFlag, Cancelled, ClassificationMap, Safety, UnsafeMode};
use palisade_decl::{ArtifactBuild, ArtifactTable, MarkerCtorShape, MarkerTypeDef, SymbolDecl};
use thiserror::Error;
use crate::{
    ArtifactMarkers, EmitError, MarkerDefSource, RULES_VERSION, SYMBOL_MARKER_TYPE,
    VERSION_MARKER_TYPE,
};

/// Synthesis failure: either a fatal emission error or cancellation
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Synthesize the markers to embed in a produced artifact
pub fn synthesize(
    build: &ArtifactBuild,
    classifications: &ClassificationMap,
    own_participation: bool,
    references: &ArtifactTable,
    cancel: &CancelFlag,
) -> Result<ArtifactMarkers, SynthesisError> {
    if !own_participation {
        return Ok(ArtifactMarkers::empty());
    }

    let mut markers = ArtifactMarkers::empty();

    // The version marker attaches to the compiled unit itself; a unit with
    // absolutely nothing to own it gets none.
    if build.has_module_container {
        markers.version_marker = Some(RULES_VERSION);
        markers.definitions.version_marker = Some(resolve_definition(
            build,
            references,
            VERSION_MARKER_TYPE,
            MarkerCtorShape::IntVersion,
            |defs| defs.version_marker.as_ref(),
        )?);
    }

    for symbol in &build.symbols {
        cancel.check()?;
        if classifications.safety_of(symbol.id) != Safety::RequiresUnsafe(UnsafeMode::Explicit) {
            continue;
        }
        if !symbol.kind.supports_symbol_marker() {
            continue;
        }
        if !is_externally_reachable(build, symbol) {
            continue;
        }
        markers.symbol_markers.insert(symbol.id);
    }

    if !markers.symbol_markers.is_empty() {
        markers.definitions.symbol_marker = Some(resolve_definition(
            build,
            references,
            SYMBOL_MARKER_TYPE,
            MarkerCtorShape::NoArguments,
            |defs| defs.symbol_marker.as_ref(),
        )?);
    }

    Ok(markers)
}

/// Whether a symbol can be observed from outside the artifact: its own
/// visibility and every containing type's visibility must allow it
fn is_externally_reachable(build: &ArtifactBuild, symbol: &SymbolDecl) -> bool {
    if !symbol.visibility.is_externally_reachable() {
        return false;
    }

    let mut container = symbol.containing_type;
    // Container chains are finite; the bound guards malformed input.
    for _ in 0..64 {
        match container {
            None => return true,
            Some(id) => match build.symbol(id) {
                Some(outer) => {
                    if !outer.visibility.is_externally_reachable() {
                        return false;
                    }
                    container = outer.containing_type;
                }
                // Unknown container: treat as unreachable rather than leak
                // a marker for a symbol we cannot place.
                None => return false,
            },
        }
    }
    false
}

/// Definition-reuse priority: own source first (fatal if its constructor
/// shape is wrong), then a single unambiguous external definition, else a
/// private synthesized one. Ambiguity is resolved silently by synthesis.
fn resolve_definition<'a>(
    build: &'a ArtifactBuild,
    references: &'a ArtifactTable,
    type_name: &str,
    required_ctor: MarkerCtorShape,
    select: impl Fn(&'a palisade_decl::MarkerDefSet) -> Option<&'a MarkerTypeDef>,
) -> Result<MarkerDefSource, EmitError> {
    if let Some(local) = select(&build.local_marker_defs) {
        if !local.has_ctor(required_ctor) {
            return Err(EmitError::MissingRequiredMember {
                type_name: type_name.to_string(),
                member: "ctor".to_string(),
            });
        }
        return Ok(MarkerDefSource::SourceDefined);
    }

    // Collect usable external definitions, deduplicated by artifact so the
    // same definition seen through multiple reference paths stays a single
    // candidate.
    let mut candidates: Vec<palisade_decl::ArtifactId> = Vec::new();
    for reference in &build.references {
        let Some(artifact) = references.get(*reference) else {
            continue;
        };
        let Some(def) = select(&artifact.exported_marker_defs) else {
            continue;
        };
        if def.has_ctor(required_ctor) && !candidates.contains(&artifact.id) {
            candidates.push(artifact.id);
        }
    }

    match candidates.as_slice() {
        [single] => Ok(MarkerDefSource::External(*single)),
        _ => Ok(MarkerDefSource::Synthesized),
    }
}
