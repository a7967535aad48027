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

use crate::catalog::TopicCatalog;
use crate::error::{QueryError, Result};
use crate::skgif::{FlatTopic, GraphDocument, GraphFormatter, GraphNode, ResultPage};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Which response shape a suggestion request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseProfile {
    /// Matches plus their broader chains, as SKG-IF topic nodes after a
    /// data-source node.
    FullHierarchy,
    /// Matches only, as a `meta`/`results` page.
    FlatResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TopicResponse {
    Graph(GraphDocument<GraphNode>),
    Page(ResultPage),
}

/// Topic suggestions and lookup over a shared catalog.
///
/// Input validation (term length, language pattern) is the caller's job.
#[derive(Debug, Clone)]
pub struct TopicService {
    catalog: Arc<TopicCatalog>,
    formatter: GraphFormatter,
}

impl TopicService {
    pub fn new(catalog: Arc<TopicCatalog>, formatter: GraphFormatter) -> Self {
        Self { catalog, formatter }
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn suggest(&self, profile: ResponseProfile, term: &str, language: &str) -> TopicResponse {
        let engine = self.catalog.engine();
        let store = self.catalog.store();
        let matches = engine.search(term, language);

        match profile {
            ResponseProfile::FullHierarchy => {
                let related = engine.expand_ancestors(matches.iter().copied());
                debug!(
                    matches = matches.len(),
                    related = related.len(),
                    "Expanded broader chains"
                );
                let records = related.into_iter().filter_map(|id| store.get(id));
                TopicResponse::Graph(self.formatter.full_hierarchy(records, language))
            }
            ResponseProfile::FlatResult => {
                let records = matches.into_iter().filter_map(|id| store.get(id));
                TopicResponse::Page(self.formatter.result_page(records))
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Result<GraphDocument<FlatTopic>> {
        self.catalog
            .store()
            .get(id)
            .map(|record| self.formatter.single_topic(record))
            .ok_or_else(|| QueryError::TopicNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skgif_core::{ConceptRecord, ConceptStore};

    fn service() -> TopicService {
        let store = ConceptStore::from_records(vec![
            ConceptRecord::new("C")
                .with_pref_label("en", "Poverty")
                .with_pref_label("de", "Armut")
                .with_broader("B"),
            ConceptRecord::new("A").with_pref_label("en", "Society"),
            ConceptRecord::new("B")
                .with_pref_label("en", "Social problems")
                .with_broader("A"),
        ]);
        TopicService::new(
            Arc::new(TopicCatalog::new(store)),
            GraphFormatter::default(),
        )
    }

    fn graph_ids(response: &TopicResponse) -> Vec<String> {
        match response {
            TopicResponse::Graph(doc) => doc
                .graph
                .iter()
                .filter_map(|node| match node {
                    GraphNode::Topic(topic) => Some(topic.local_identifier.clone()),
                    GraphNode::DataSource(_) => None,
                })
                .collect(),
            TopicResponse::Page(_) => panic!("expected a graph response"),
        }
    }

    #[test]
    fn test_full_hierarchy_expands_sorted() {
        let response = service().suggest(ResponseProfile::FullHierarchy, "pov", "en");
        assert_eq!(graph_ids(&response), vec!["A", "B", "C"]);

        match response {
            TopicResponse::Graph(doc) => {
                assert!(matches!(doc.graph[0], GraphNode::DataSource(_)));
            }
            TopicResponse::Page(_) => panic!("expected a graph response"),
        }
    }

    #[test]
    fn test_flat_result_returns_matches_only() {
        let response = service().suggest(ResponseProfile::FlatResult, "pov", "en");
        match response {
            TopicResponse::Page(page) => {
                assert_eq!(page.meta.count, 1);
                assert_eq!(page.results[0].local_identifier, "C");
                assert_eq!(page.results[0].labels.len(), 2);
            }
            TopicResponse::Graph(_) => panic!("expected a page response"),
        }
    }

    #[test]
    fn test_no_match_yields_data_source_only() {
        let response = service().suggest(ResponseProfile::FullHierarchy, "zzz", "en");
        assert!(graph_ids(&response).is_empty());
    }

    #[test]
    fn test_lookup() {
        let service = service();
        let doc = service.lookup("B").unwrap();
        assert_eq!(doc.graph.len(), 1);
        assert_eq!(doc.graph[0].local_identifier, "B");

        assert_eq!(
            service.lookup("Z").unwrap_err().to_string(),
            "Topic with ID 'Z' not found."
        );
    }

    #[test]
    fn test_responses_are_deterministic() {
        let service = service();
        let render = || {
            serde_json::to_string(&service.suggest(ResponseProfile::FullHierarchy, "o", "en"))
                .unwrap()
        };
        assert_eq!(render(), render());
    }
}
