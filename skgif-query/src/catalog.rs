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

use crate::engine::QueryEngine;
use skgif_core::ConceptStore;
use skgif_index::LabelIndex;
use std::path::Path;

/// Concept store and its label index, built together and never modified.
///
/// Wrap in an `Arc` to share across request handlers; all access is
/// read-only so no locking is involved.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    store: ConceptStore,
    index: LabelIndex,
}

impl TopicCatalog {
    /// Index an existing store.
    pub fn new(store: ConceptStore) -> Self {
        let index = LabelIndex::build(&store);
        Self { store, index }
    }

    /// Load an export from disk and index it. Never fails; a bad or missing
    /// file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Self {
        Self::new(skgif_core::load_path(path))
    }

    pub fn store(&self) -> &ConceptStore {
        &self.store
    }

    pub fn index(&self) -> &LabelIndex {
        &self.index
    }

    pub fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.store, &self.index)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
