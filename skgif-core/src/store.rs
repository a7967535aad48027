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

//! Immutable concept table keyed by concept URI.

use crate::concept::ConceptRecord;
use std::collections::HashMap;

/// Read-only table of concepts.
///
/// Records are kept in first-insertion order so that everything derived from
/// the store (the label index in particular) is reproducible. A later record
/// with an id already present replaces the earlier one in place.
///
/// There is no public mutation API: a store is assembled once through
/// [`ConceptStore::from_records`] (or the loader) and then only read.
#[derive(Debug, Clone, Default)]
pub struct ConceptStore {
    records: Vec<ConceptRecord>,
    positions: HashMap<String, usize>,
}

impl ConceptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records; duplicate ids overwrite earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ConceptRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub(crate) fn insert(&mut self, record: ConceptRecord) {
        if record.id.is_empty() {
            return;
        }
        match self.positions.get(&record.id) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.positions.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ConceptRecord> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &ConceptRecord> {
        self.records.iter()
    }

    /// Concept ids in store order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }
}

impl FromIterator<ConceptRecord> for ConceptStore {
    fn from_iter<I: IntoIterator<Item = ConceptRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
