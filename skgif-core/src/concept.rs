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

//! Normalized SKOS concept record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One SKOS concept, reduced to what autocomplete needs.
///
/// Labels are keyed by language code. A language has at most one preferred
/// label but any number of alternative labels, kept in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// Global concept URI.
    #[serde(rename = "@id")]
    pub id: String,
    /// Preferred label per language.
    #[serde(rename = "prefLabels", default)]
    pub pref_labels: BTreeMap<String, String>,
    /// Alternative labels per language, in source order.
    #[serde(rename = "altLabels", default)]
    pub alt_labels: BTreeMap<String, Vec<String>>,
    /// First `skos:broader` parent, if any. May dangle.
    #[serde(default)]
    pub broader: Option<String>,
}

impl ConceptRecord {
    /// Create a record with no labels and no parent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pref_labels: BTreeMap::new(),
            alt_labels: BTreeMap::new(),
            broader: None,
        }
    }

    /// Set the preferred label for a language, replacing any previous one.
    pub fn with_pref_label(mut self, language: impl Into<String>, label: impl Into<String>) -> Self {
        self.pref_labels.insert(language.into(), label.into());
        self
    }

    /// Append an alternative label for a language.
    pub fn with_alt_label(mut self, language: impl Into<String>, label: impl Into<String>) -> Self {
        self.alt_labels
            .entry(language.into())
            .or_default()
            .push(label.into());
        self
    }

    /// Set the parent concept.
    pub fn with_broader(mut self, broader: impl Into<String>) -> Self {
        self.broader = Some(broader.into());
        self
    }

    /// Preferred label in `language`.
    pub fn pref_label(&self, language: &str) -> Option<&str> {
        self.pref_labels.get(language).map(String::as_str)
    }

    /// Alternative labels in `language`; empty when there are none.
    pub fn alt_labels_in(&self, language: &str) -> &[String] {
        self.alt_labels
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
