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

//! Label index for substring lookups.

use serde::Serialize;
use skgif_core::ConceptStore;
use std::collections::BTreeMap;
use tracing::info;

/// A lowercased label pointing back at its concept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IndexEntry {
    /// Label text, lowercased.
    pub label: String,
    /// Owning concept URI.
    pub concept_id: String,
}

impl IndexEntry {
    pub fn new(label: &str, concept_id: &str) -> Self {
        Self {
            label: label.to_lowercase(),
            concept_id: concept_id.to_string(),
        }
    }
}

/// Entry counts of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Entries per language.
    pub languages: BTreeMap<String, usize>,
    /// Entries across all languages.
    pub total_entries: usize,
}

/// Read-only per-language posting lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    postings: BTreeMap<String, Vec<IndexEntry>>,
}

impl LabelIndex {
    /// Build the index from a concept store. An empty store gives an empty index.
    pub fn build(store: &ConceptStore) -> Self {
        info!("Building search index...");
        let mut postings: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();

        for concept in store.iter() {
            for (lang, label) in &concept.pref_labels {
                postings
                    .entry(lang.clone())
                    .or_default()
                    .push(IndexEntry::new(label, &concept.id));
            }

            for (lang, labels) in &concept.alt_labels {
                let list = postings.entry(lang.clone()).or_default();
                list.extend(labels.iter().map(|label| IndexEntry::new(label, &concept.id)));
            }
        }

        for (lang, entries) in &postings {
            info!("  - Indexed {} labels for language '{}'", entries.len(), lang);
        }
        info!("Search index built.");

        Self { postings }
    }

    /// Posting list for `language`; empty if the language is unknown.
    pub fn postings(&self, language: &str) -> &[IndexEntry] {
        self.postings
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Entries in `language` whose label contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn entries_containing<'a, 'n>(
        &'a self,
        language: &str,
        needle: &'n str,
    ) -> impl Iterator<Item = &'a IndexEntry> + 'n
    where
        'a: 'n,
    {
        self.postings(language)
            .iter()
            .filter(move |entry| entry.label.contains(needle))
    }

    /// Indexed languages, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// All (language, posting list) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IndexEntry])> {
        self.postings
            .iter()
            .map(|(lang, entries)| (lang.as_str(), entries.as_slice()))
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.values().all(Vec::is_empty)
    }

    pub fn stats(&self) -> IndexStats {
        let languages: BTreeMap<String, usize> = self
            .postings
            .iter()
            .map(|(lang, entries)| (lang.clone(), entries.len()))
            .collect();
        let total_entries = languages.values().sum();
        IndexStats {
            languages,
            total_entries,
        }
    }
}
