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

//! SKG-IF rendering
//!
//! Output shapes for the two response profiles and single-topic lookup, plus
//! minting of topic `@id`s from concept identifiers.
//!
//! Field declaration order is the serialized key order.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use skgif_core::ConceptRecord;
use std::collections::BTreeMap;

pub const DEFAULT_BASE_URL: &str = "https://w3id.org/skg-if/sandbox/cessda-elsst/";
pub const DEFAULT_CONTEXT_URL: &str = "https://w3id.org/skg-if/context/1.0.1/skg-if.json";

pub const DEFAULT_DATA_SOURCE_ID: &str = "urn:cessda:elsst-v5";
pub const DEFAULT_DATA_SOURCE_LOCAL_ID: &str = "elsst-v5";
pub const DEFAULT_DATA_SOURCE_NAME: &str =
    "European Language Social Science Thesaurus (ELSST) - Version 5";
pub const DEFAULT_DATA_SOURCE_URL: &str = "https://thesauri.cessda.eu/elsst-5/en/";

/// Bytes left literal when minting: ASCII alphanumerics plus `_ . - ~ /`.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

const TOPIC_TYPE: &str = "Topic";
const DATA_SOURCE_TYPE: &str = "DataSource";
const TOPIC_ENTITY_TYPE: &str = "topic";

/// The thesaurus every topic node points back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSource {
    pub id: String,
    pub local_identifier: String,
    pub name: String,
    pub url: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            id: DEFAULT_DATA_SOURCE_ID.to_string(),
            local_identifier: DEFAULT_DATA_SOURCE_LOCAL_ID.to_string(),
            name: DEFAULT_DATA_SOURCE_NAME.to_string(),
            url: DEFAULT_DATA_SOURCE_URL.to_string(),
        }
    }
}

/// `{"@context": [...], "@graph": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument<N> {
    #[serde(rename = "@context")]
    pub context: Vec<ContextEntry>,
    #[serde(rename = "@graph")]
    pub graph: Vec<N>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextEntry {
    Url(String),
    Base {
        #[serde(rename = "@base")]
        base: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphNode {
    DataSource(DataSourceNode),
    Topic(TopicNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub local_identifier: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub local_identifier: String,
    pub name: String,
    pub source: NodeRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_name: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_topic: Option<TopicRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRef {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub local_identifier: String,
}

/// Flat-result item: the concept id and all of its preferred labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatTopic {
    pub local_identifier: String,
    pub identifiers: Vec<ExternalIdentifier>,
    pub entity_type: &'static str,
    pub labels: BTreeMap<String, String>,
}

/// Always empty for thesaurus concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalIdentifier {
    pub scheme: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage {
    pub meta: PageMeta,
    pub results: Vec<FlatTopic>,
}

/// No pagination is performed; `page` and `page_size` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub count: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Renders concept records into SKG-IF documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFormatter {
    base_url: String,
    context_url: String,
    data_source: DataSource,
}

impl Default for GraphFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_CONTEXT_URL, DataSource::default())
    }
}

impl GraphFormatter {
    pub fn new(
        base_url: impl Into<String>,
        context_url: impl Into<String>,
        data_source: DataSource,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            context_url: context_url.into(),
            data_source,
        }
    }

    /// Base URL followed by the percent-encoded concept identifier.
    ///
    /// `http://purl.org/elsst/4/es/368` becomes
    /// `<base>http%3A//purl.org/elsst/4/es/368`.
    pub fn mint_id(&self, local_id: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            utf8_percent_encode(local_id, ID_ENCODE_SET)
        )
    }

    pub fn context(&self) -> Vec<ContextEntry> {
        vec![
            ContextEntry::Url(self.context_url.clone()),
            ContextEntry::Base {
                base: self.base_url.clone(),
            },
        ]
    }

    pub fn data_source_node(&self) -> DataSourceNode {
        DataSourceNode {
            id: self.data_source.id.clone(),
            node_type: DATA_SOURCE_TYPE,
            local_identifier: self.data_source.local_identifier.clone(),
            name: self.data_source.name.clone(),
            url: self.data_source.url.clone(),
        }
    }

    /// Topic node with display text taken from `language`.
    pub fn topic_node(&self, record: &ConceptRecord, language: &str) -> TopicNode {
        TopicNode {
            id: self.mint_id(&record.id),
            node_type: TOPIC_TYPE,
            local_identifier: record.id.clone(),
            name: record.pref_label(language).unwrap_or_default().to_string(),
            source: NodeRef {
                id: self.data_source.id.clone(),
            },
            alternate_name: record.alt_labels_in(language).to_vec(),
            parent_topic: record.broader.as_ref().map(|parent| TopicRef {
                node_type: TOPIC_TYPE,
                local_identifier: parent.clone(),
            }),
        }
    }

    /// Data-source node followed by one topic node per record, in the order
    /// given.
    pub fn full_hierarchy<'r, I>(&self, records: I, language: &str) -> GraphDocument<GraphNode>
    where
        I: IntoIterator<Item = &'r ConceptRecord>,
    {
        let graph = std::iter::once(GraphNode::DataSource(self.data_source_node()))
            .chain(
                records
                    .into_iter()
                    .map(|record| GraphNode::Topic(self.topic_node(record, language))),
            )
            .collect();

        GraphDocument {
            context: self.context(),
            graph,
        }
    }

    pub fn flat_topic(&self, record: &ConceptRecord) -> FlatTopic {
        FlatTopic {
            local_identifier: record.id.clone(),
            identifiers: Vec::new(),
            entity_type: TOPIC_ENTITY_TYPE,
            labels: record.pref_labels.clone(),
        }
    }

    pub fn result_page<'r, I>(&self, records: I) -> ResultPage
    where
        I: IntoIterator<Item = &'r ConceptRecord>,
    {
        let results: Vec<FlatTopic> = records
            .into_iter()
            .map(|record| self.flat_topic(record))
            .collect();

        ResultPage {
            meta: PageMeta {
                count: results.len(),
                page: 0,
                page_size: 0,
            },
            results,
        }
    }

    pub fn single_topic(&self, record: &ConceptRecord) -> GraphDocument<FlatTopic> {
        GraphDocument {
            context: self.context(),
            graph: vec![self.flat_topic(record)],
        }
    }
}
