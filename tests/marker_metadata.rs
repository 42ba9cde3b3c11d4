//! Tests for the marker metadata surface
//!
//! The per-symbol safety markers are physically embedded but
//! compiler-private: reflection-style queries must never see them, the
//! reserved marker types must be rejected in user source, and malformed
//! version markers must resolve silently but report at every use site.

use std::collections::HashMap;

use palisade::artifact::{
    ArtifactMarkers, EmittedMetadata, MetadataReader, UserMarker, RULES_VERSION,
    SYMBOL_MARKER_TYPE, VERSION_MARKER_TYPE,
};
use palisade::decl::{
    AppliedVersionMarker, Artifact, ArtifactId, Signature, Span, SymbolDecl, SymbolId, SymbolKind,
    TypeShape,
};
use palisade::gate::{check, check_reserved_marker, AnalysisContext, GateDiagnosticKind, UseSite};

#[test]
fn safety_markers_are_invisible_to_user_queries() {
    let mut safety = ArtifactMarkers::empty();
    safety.version_marker = Some(RULES_VERSION);
    safety.symbol_markers.insert(SymbolId(1));

    let mut user = HashMap::new();
    user.insert(
        SymbolId(1),
        vec![UserMarker::new("app.Experimental", vec![])],
    );
    let metadata = EmittedMetadata::new(user, safety);

    // Physically present...
    assert!(metadata
        .physical_markers_on(SymbolId(1))
        .iter()
        .any(|m| m.type_name == SYMBOL_MARKER_TYPE));
    // ...but the generic query only returns the user marker.
    let visible = metadata.markers_on(SymbolId(1));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].type_name, "app.Experimental");
    // The dedicated internal query is the only way to observe it.
    assert!(metadata.safety_marker_on(SymbolId(1)));
}

#[test]
fn reserved_marker_types_cannot_be_applied_in_source() {
    for reserved in [VERSION_MARKER_TYPE, SYMBOL_MARKER_TYPE] {
        let diag = check_reserved_marker(reserved, Span::new(4, 20)).unwrap_err();
        assert!(matches!(diag.kind, GateDiagnosticKind::ReservedMarker { .. }));
        assert_eq!(diag.span, Span::new(4, 20));
    }
    assert!(check_reserved_marker("app.Experimental", Span::dummy()).is_ok());
}

#[test]
fn malformed_version_marker_poisons_references_into_the_artifact() {
    let lib = ArtifactId(1);
    // Version marker present with an unknown version, plus a marked symbol.
    let artifact = Artifact::new(lib, "lib")
        .with_version_marker(AppliedVersionMarker::Versioned(7))
        .with_symbol_marker(SymbolId(1));

    let mut ctx = AnalysisContext::new(ArtifactId(2)).with_updated_rules(true);
    ctx.artifacts.insert(artifact.clone());

    // Resolution itself is silent.
    let participation = ctx.resolve_producer(lib, "A");
    assert!(!participation.participates);

    // The degradation surfaces at references: every non-permissive use of
    // a symbol from the artifact reports it, marked or not, naming the
    // marker type and the expected version.
    let safe = SymbolDecl::new(SymbolId(2), "A.Safe", SymbolKind::Method, lib);
    let marked = SymbolDecl::new(SymbolId(1), "A.M", SymbolKind::Method, lib);
    for target in [&safe, &marked] {
        let diag = check(&UseSite::new(Span::new(9, 14), false), target, &mut ctx).unwrap_err();
        match diag.kind {
            GateDiagnosticKind::UnrecognizedMarkerVersion { marker_type, expected, .. } => {
                assert_eq!(marker_type, VERSION_MARKER_TYPE);
                assert_eq!(expected, RULES_VERSION);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    // The consumer's own rules state does not matter.
    let mut opted_out = AnalysisContext::new(ArtifactId(2));
    opted_out.artifacts.insert(artifact);
    assert!(check(&UseSite::new(Span::dummy(), false), &safe, &mut opted_out).is_err());

    // A permissive context suppresses even that.
    assert!(check(&UseSite::new(Span::dummy(), true), &marked, &mut ctx).is_ok());
}

#[test]
fn preview_gate_blocks_only_marker_backed_symbols() {
    let lib = ArtifactId(1);
    let artifact = Artifact::new(lib, "lib")
        .with_version_marker(AppliedVersionMarker::Versioned(RULES_VERSION))
        .with_symbol_marker(SymbolId(1));

    let mut ctx = AnalysisContext::new(ArtifactId(2))
        .with_updated_rules(true)
        .with_language_gate(false);
    ctx.artifacts.insert(artifact);

    // Marker-backed symbol: the missing language feature is reported.
    let marked = SymbolDecl::new(SymbolId(1), "A.M", SymbolKind::Method, lib);
    let diag = check(&UseSite::new(Span::dummy(), false), &marked, &mut ctx).unwrap_err();
    assert!(matches!(diag.kind, GateDiagnosticKind::FeatureNotAvailable { .. }));

    // Unmarked symbol with restricted types: legacy wording applies.
    let structural = SymbolDecl::new(SymbolId(2), "A.P", SymbolKind::Method, lib).with_signature(
        Signature::new(
            vec![TypeShape::RawPointer(Box::new(TypeShape::named("Int")))],
            None,
        ),
    );
    let diag = check(&UseSite::new(Span::dummy(), false), &structural, &mut ctx).unwrap_err();
    assert!(matches!(diag.kind, GateDiagnosticKind::LegacyUnsafeNeeded { .. }));
}
