//! Write-once classification cache
//!
//! Classifications are computed once during semantic analysis and frozen;
//! marker synthesis and use-site checks read them afterwards. Writes are
//! partitioned by symbol id, so a plain map with insert-once semantics is
//! enough.

use palisade_decl::{SymbolDecl, SymbolId};
use std::collections::HashMap;
use crate::{classify, CancelFlag, Cancelled, Safety};

/// Per-symbol classifications for one artifact, written exactly once
#[derive(Debug, Clone, Default)]
pub struct ClassificationMap {
    entries: HashMap<SymbolId, Safety>,
}

impl ClassificationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification. First write wins; a repeated write is a
    /// no-op because classification is deterministic and must agree.
    pub fn record(&mut self, symbol: SymbolId, safety: Safety) {
        self.entries.entry(symbol).or_insert(safety);
    }

    /// Look up a recorded classification
    pub fn get(&self, symbol: SymbolId) -> Option<Safety> {
        self.entries.get(&symbol).copied()
    }

    /// Classification for decision purposes; unrecorded symbols are the
    /// default unmarked state
    pub fn safety_of(&self, symbol: SymbolId) -> Safety {
        self.get(symbol).unwrap_or(Safety::None)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, Safety)> + '_ {
        self.entries.iter().map(|(id, s)| (*id, *s))
    }
}

/// Classify every symbol of an artifact into a fresh map
///
/// Checks the cancellation flag between symbols, never mid-decision.
pub fn classify_all(
    symbols: &[SymbolDecl],
    producer_participates: bool,
    cancel: &CancelFlag,
) -> Result<ClassificationMap, Cancelled> {
    let mut map = ClassificationMap::new();
    for decl in symbols {
        cancel.check()?;
        map.record(decl.id, classify(decl, producer_participates));
    }
    Ok(map)
}
