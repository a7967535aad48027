// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Substring matching and broader-chain expansion.
//!
//! Results are `BTreeSet`s so iteration is always sorted by concept id,
//! which keeps repeated queries byte-identical.

use skgif_core::ConceptStore;
use skgif_index::LabelIndex;
use std::collections::BTreeSet;
use tracing::debug;

/// Hop limit when following `broader` links. Guards against cycles and
/// malformed chains; hitting it is not an error.
pub const MAX_ANCESTOR_DEPTH: usize = 20;

/// Read-only view over a store and its index.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a ConceptStore,
    index: &'a LabelIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a ConceptStore, index: &'a LabelIndex) -> Self {
        Self { store, index }
    }

    /// Concepts with a label in `language` containing `term`, ignoring case.
    ///
    /// No tokenization or ranking; a concept is returned once however many of
    /// its labels match.
    pub fn search(&self, term: &str, language: &str) -> BTreeSet<&'a str> {
        let needle = term.to_lowercase();
        let index: &'a LabelIndex = self.index;

        let matches: BTreeSet<&'a str> = index
            .entries_containing(language, &needle)
            .map(|entry| entry.concept_id.as_str())
            .collect();

        debug!(
            term = %term,
            language = %language,
            matches = matches.len(),
            "Label search"
        );
        matches
    }

    /// `id` and every concept reachable by following `broader`.
    ///
    /// Stops at a missing parent, at a revisited concept or after
    /// [`MAX_ANCESTOR_DEPTH`] hops, returning what was collected so far. An
    /// id that is not in the store yields an empty set.
    pub fn ancestors(&self, id: &str) -> BTreeSet<&'a str> {
        let store: &'a ConceptStore = self.store;
        let mut chain = BTreeSet::new();
        let mut current = Some(id);

        for _ in 0..MAX_ANCESTOR_DEPTH {
            let Some(concept_id) = current else { break };
            let Some(record) = store.get(concept_id) else { break };
            if !chain.insert(record.id.as_str()) {
                break;
            }
            current = record.broader.as_deref();
        }

        chain
    }

    /// Union of [`ancestors`](Self::ancestors) over `ids`.
    pub fn expand_ancestors<'i, I>(&self, ids: I) -> BTreeSet<&'a str>
    where
        I: IntoIterator<Item = &'i str>,
    {
        ids.into_iter()
            .flat_map(|id| self.ancestors(id))
            .collect()
    }
}
