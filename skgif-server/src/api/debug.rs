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

//! Index inspection, only routed when debug endpoints are enabled

use axum::{extract::State, Json};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use skgif_core::ConceptRecord;
use skgif_query::TopicCatalog;
use std::collections::BTreeMap;

use crate::api::AppState;

/// Maximum items sampled from the store and from each language's postings
pub const SAMPLE_SIZE: usize = 10;

/// Index entries are rendered as `[label, concept_id]` pairs.
#[derive(Debug, Serialize)]
pub struct IndexSample {
    pub elsst_data_sample: BTreeMap<String, ConceptRecord>,
    pub search_index_sample: BTreeMap<String, Vec<(String, String)>>,
}

/// Random sample of concept records and index entries.
pub fn sample_catalog<R: Rng + ?Sized>(catalog: &TopicCatalog, rng: &mut R) -> IndexSample {
    let elsst_data_sample: BTreeMap<String, ConceptRecord> = catalog
        .store()
        .iter()
        .choose_multiple(rng, SAMPLE_SIZE)
        .into_iter()
        .map(|record| (record.id.clone(), record.clone()))
        .collect();

    let search_index_sample = catalog
        .index()
        .iter()
        .map(|(lang, entries)| {
            let picked: Vec<(String, String)> = entries
                .choose_multiple(rng, SAMPLE_SIZE)
                .map(|entry| (entry.label.clone(), entry.concept_id.clone()))
                .collect();
            (lang.to_string(), picked)
        })
        .collect();

    IndexSample {
        elsst_data_sample,
        search_index_sample,
    }
}

/// GET /show_index_data
pub async fn show_index_data(State(state): State<AppState>) -> Json<IndexSample> {
    let sample = sample_catalog(state.service.catalog(), &mut rand::thread_rng());
    Json(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use skgif_core::ConceptStore;

    #[test]
    fn test_sample_is_capped() {
        let store = ConceptStore::from_records((0..25).map(|i| {
            ConceptRecord::new(format!("urn:{}", i)).with_pref_label("en", format!("label {}", i))
        }));
        let catalog = TopicCatalog::new(store);
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sample_catalog(&catalog, &mut rng);
        assert_eq!(sample.elsst_data_sample.len(), SAMPLE_SIZE);
        assert_eq!(sample.search_index_sample["en"].len(), SAMPLE_SIZE);
        for (id, record) in &sample.elsst_data_sample {
            assert_eq!(id, &record.id);
        }
        for (label, concept_id) in &sample.search_index_sample["en"] {
            assert!(label.starts_with("label "));
            assert!(concept_id.starts_with("urn:"));
        }
    }

    #[test]
    fn test_sample_serializes_entries_as_pairs() {
        let store =
            ConceptStore::from_records(vec![ConceptRecord::new("urn:x").with_pref_label("en", "Poverty")]);
        let catalog = TopicCatalog::new(store);
        let sample = sample_catalog(&catalog, &mut StdRng::seed_from_u64(3));

        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            value["search_index_sample"]["en"],
            serde_json::json!([["poverty", "urn:x"]])
        );
        assert_eq!(value["elsst_data_sample"]["urn:x"]["@id"], "urn:x");
        assert!(value.get("data_sample").is_none());
    }

    #[test]
    fn test_sample_of_empty_catalog() {
        let catalog = TopicCatalog::default();
        let sample = sample_catalog(&catalog, &mut StdRng::seed_from_u64(1));
        assert!(sample.elsst_data_sample.is_empty());
        assert!(sample.search_index_sample.is_empty());
    }
}
