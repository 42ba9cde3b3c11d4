//! The use-site decision table
//!
//! A permissive context suppresses every check, including the legacy
//! structural one. Outside one, the outcome depends on the target's
//! classification, the producing artifact's rules participation, the
//! consuming compilation's own rules state, and the language-version gate.

use palisade_artifact::{follow_type_forwards, Recognition, VERSION_MARKER_TYPE};
use palisade_classify::{classify, Safety, UnsafeMode};
use palisade_decl::{Span, SymbolDecl};
use crate::{AnalysisContext, Diagnostic, GateDiagnosticKind};

/// How a reference uses its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Invoke,
    Read,
    Write,
    /// Reference that only observes the symbol's name/identity; never gated
    NameOnly,
}

/// One reference to a symbol, as reported by the surrounding context tracker
#[derive(Debug, Clone, Copy)]
pub struct UseSite {
    /// Location of the reference
    pub span: Span,
    /// Whether the lexical point is inside a permissive block/method/type
    pub permissive: bool,
    pub ref_kind: RefKind,
}

impl UseSite {
    pub fn new(span: Span, permissive: bool) -> Self {
        Self {
            span,
            permissive,
            ref_kind: RefKind::Invoke,
        }
    }

    pub fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }
}

/// Check one reference; `Err` carries the single diagnostic for it
pub fn check(
    site: &UseSite,
    target: &SymbolDecl,
    ctx: &mut AnalysisContext,
) -> Result<(), Diagnostic> {
    if site.ref_kind == RefKind::NameOnly {
        return Ok(());
    }
    if site.permissive {
        return Ok(());
    }

    if target.artifact == ctx.own_artifact {
        check_own(site, target, ctx)
    } else {
        check_foreign(site, target, ctx)
    }
}

/// Own-artifact reference: classification is consulted directly
fn check_own(site: &UseSite, target: &SymbolDecl, ctx: &AnalysisContext) -> Result<(), Diagnostic> {
    let safety = ctx
        .classifications
        .get(target.id)
        .unwrap_or_else(|| classify(target, ctx.own_participates()));

    match safety {
        Safety::None | Safety::Safe => Ok(()),
        Safety::RequiresUnsafe(UnsafeMode::Explicit) => {
            if !ctx.updated_rules_requested {
                legacy_structural_check(site, target)
            } else if !ctx.language_gate_open {
                Err(Diagnostic::new(
                    GateDiagnosticKind::FeatureNotAvailable {
                        symbol: target.name.clone(),
                    },
                    site.span,
                ))
            } else {
                Err(Diagnostic::new(
                    GateDiagnosticKind::ExplicitRestrictionViolation {
                        symbol: target.name.clone(),
                    },
                    site.span,
                ))
            }
        }
        // Implicit own classification only arises when this compilation is
        // not participating; the legacy rule governs it.
        Safety::RequiresUnsafe(UnsafeMode::Implicit) => legacy_structural_check(site, target),
    }
}

/// Foreign-artifact reference: the producer's markers govern
fn check_foreign(
    site: &UseSite,
    target: &SymbolDecl,
    ctx: &mut AnalysisContext,
) -> Result<(), Diagnostic> {
    let type_name = top_level_type_name(&target.name);
    let producer = ctx.resolve_producer(target.artifact, type_name);

    // A physically present but unrecognized version marker poisons every
    // reference into the artifact, whatever the consumer's own rules
    // state. Resolution itself stays silent (soft degradation); the
    // report lands here, attributed to the reference.
    if producer.recognition == Recognition::Unrecognized {
        return Err(Diagnostic::new(
            GateDiagnosticKind::UnrecognizedMarkerVersion {
                symbol: target.name.clone(),
                marker_type: VERSION_MARKER_TYPE.to_string(),
                expected: ctx.expected_version,
            },
            site.span,
        ));
    }

    // A consumer that opted out of the updated rules only ever applies the
    // legacy structural rule.
    if !ctx.updated_rules_requested {
        return legacy_structural_check(site, target);
    }

    let resolved_artifact = follow_type_forwards(&ctx.artifacts, target.artifact, type_name);
    let marked = producer.recognition == Recognition::Recognized
        && ctx
            .artifacts
            .get(resolved_artifact)
            .is_some_and(|a| a.has_symbol_marker(target.id));

    if marked {
        // Preview-gated compilation reports the missing feature for
        // symbols a participating producer explicitly marked.
        if !ctx.language_gate_open {
            return Err(Diagnostic::new(
                GateDiagnosticKind::FeatureNotAvailable {
                    symbol: target.name.clone(),
                },
                site.span,
            ));
        }
        return Err(Diagnostic::new(
            GateDiagnosticKind::ExplicitRestrictionViolation {
                symbol: target.name.clone(),
            },
            site.span,
        ));
    }

    // Unmarked symbols under a closed gate fall back to the legacy rule.
    if !ctx.language_gate_open {
        return legacy_structural_check(site, target);
    }

    if producer.recognition == Recognition::Recognized {
        // Marker absence under a recognized version means safe.
        return Ok(());
    }

    // Legacy producer: recompute structurally; an explicit modifier or
    // external implementation alone does not gate here.
    if target.signature.has_restricted_types() {
        Err(Diagnostic::new(
            GateDiagnosticKind::CompatibilityViolation {
                symbol: target.name.clone(),
            },
            site.span,
        ))
    } else {
        Ok(())
    }
}

/// The pre-existing rule for compilations outside the updated regime:
/// restricted types in the signature require a permissive context
fn legacy_structural_check(site: &UseSite, target: &SymbolDecl) -> Result<(), Diagnostic> {
    if target.signature.has_restricted_types() {
        Err(Diagnostic::new(
            GateDiagnosticKind::LegacyUnsafeNeeded {
                symbol: target.name.clone(),
            },
            site.span,
        ))
    } else {
        Ok(())
    }
}

/// Reserved-marker enforcement: user source may not apply the compiler's
/// marker types directly
pub fn check_reserved_marker(
    marker_type: &str,
    span: Span,
) -> Result<(), Diagnostic> {
    if marker_type == VERSION_MARKER_TYPE || marker_type == palisade_artifact::SYMBOL_MARKER_TYPE {
        Err(Diagnostic::new(
            GateDiagnosticKind::ReservedMarker {
                marker_type: marker_type.to_string(),
            },
            span,
        ))
    } else {
        Ok(())
    }
}

fn top_level_type_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
