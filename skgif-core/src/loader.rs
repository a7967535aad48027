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

//! SKOS JSON-LD graph loader.
//!
//! Turns a thesaurus export (e.g. a Skosmos JSON-LD dump) into a
//! [`ConceptStore`]. Two document shapes are accepted:
//!
//! ```text
//! { "@graph": [ node, node, ... ] }
//! [ { "@graph": [...] }, { "@graph": [...] }, ... ]
//! ```
//!
//! Every other shape produces an empty store. Nodes that are not typed
//! `skos:Concept` or have no `@id` are skipped.

use crate::concept::ConceptRecord;
use crate::error::{LoadError, Result};
use crate::store::ConceptStore;
use crate::vocab::{
    JSONLD_GRAPH, JSONLD_ID, JSONLD_LANGUAGE, JSONLD_TYPE, JSONLD_VALUE, SKOS_ALT_LABEL,
    SKOS_BROADER, SKOS_CONCEPT, SKOS_PREF_LABEL,
};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info, warn};

/// Load a thesaurus export, degrading to an empty store on any failure.
///
/// Failures are logged, not returned. Use [`try_load_path`] to see the error.
pub fn load_path(path: impl AsRef<Path>) -> ConceptStore {
    let path = path.as_ref();
    match try_load_path(path) {
        Ok(store) => store,
        Err(LoadError::NotFound { .. }) => {
            error!(
                "Data file not found at '{}'. Download the thesaurus JSON-LD export and place it at this path.",
                path.display()
            );
            ConceptStore::new()
        }
        Err(e) => {
            error!("Failed to load thesaurus data: {}", e);
            ConceptStore::new()
        }
    }
}

/// Load a thesaurus export from disk.
pub fn try_load_path(path: impl AsRef<Path>) -> Result<ConceptStore> {
    let path = path.as_ref();
    info!("Loading thesaurus data from {:?}", path);

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::Encoding {
        path: path.to_path_buf(),
    })?;

    load_str(&text)
}

/// Parse a JSON-LD document held in memory.
pub fn load_str(json: &str) -> Result<ConceptStore> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(load_value(&doc))
}

/// Build a store from an already parsed JSON-LD document.
pub fn load_value(doc: &Value) -> ConceptStore {
    let store: ConceptStore = graph_nodes(doc)
        .into_iter()
        .filter_map(parse_concept)
        .collect();

    info!(concepts = store.len(), "Loaded {} concepts with multilingual labels", store.len());
    store
}

/// Collect the node set of the document.
fn graph_nodes(doc: &Value) -> Vec<&Value> {
    match doc {
        Value::Object(map) if map.contains_key(JSONLD_GRAPH) => match &map[JSONLD_GRAPH] {
            Value::Array(nodes) => nodes.iter().collect(),
            _ => {
                warn!("@graph is not a list; no nodes loaded");
                Vec::new()
            }
        },
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get(JSONLD_GRAPH))
            .filter_map(Value::as_array)
            .flatten()
            .collect(),
        _ => {
            warn!("No @graph found in JSON-LD");
            Vec::new()
        }
    }
}

fn parse_concept(node: &Value) -> Option<ConceptRecord> {
    let obj = node.as_object()?;
    let id = obj.get(JSONLD_ID)?.as_str()?;
    if id.is_empty() || !is_concept(obj.get(JSONLD_TYPE)) {
        return None;
    }

    let mut record = ConceptRecord::new(id);

    // Last pair per language wins.
    for (lang, value) in language_values(obj.get(SKOS_PREF_LABEL)) {
        record.pref_labels.insert(lang.to_string(), value.to_string());
    }
    for (lang, value) in language_values(obj.get(SKOS_ALT_LABEL)) {
        record
            .alt_labels
            .entry(lang.to_string())
            .or_default()
            .push(value.to_string());
    }

    // Only the first parent is kept.
    record.broader = one_or_many(obj.get(SKOS_BROADER))
        .next()
        .and_then(|parent| parent.get(JSONLD_ID))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(record)
}

fn is_concept(types: Option<&Value>) -> bool {
    one_or_many(types).any(|t| t.as_str() == Some(SKOS_CONCEPT))
}

/// `(language, value)` pairs of a language-tagged property. Entries without a
/// language or with an empty value are dropped.
fn language_values(values: Option<&Value>) -> impl Iterator<Item = (&str, &str)> {
    one_or_many(values).filter_map(|entry| {
        let lang = entry.get(JSONLD_LANGUAGE)?.as_str()?;
        let value = entry.get(JSONLD_VALUE)?.as_str()?;
        if lang.is_empty() || value.is_empty() {
            return None;
        }
        Some((lang, value))
    })
}

/// JSON-LD allows a single value wherever a list is allowed.
fn one_or_many(value: Option<&Value>) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        None | Some(Value::Null) => Box::new(std::iter::empty()),
        Some(Value::Array(items)) => Box::new(items.iter()),
        Some(single) => Box::new(std::iter::once(single)),
    }
}
