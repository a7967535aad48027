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

//! SKG-IF Topics Query Engine
//!
//! Substring search over the label index, broader-chain expansion and
//! rendering into SKG-IF graph shapes.
//!
//! - [`TopicCatalog`]: the immutable store + index pair built at startup
//! - [`QueryEngine`]: matching and ancestor expansion
//! - [`GraphFormatter`]: SKG-IF rendering and identifier minting
//! - [`TopicService`]: the two response profiles and single-topic lookup

pub mod catalog;
pub mod engine;
pub mod error;
pub mod service;
pub mod skgif;

pub use catalog::TopicCatalog;
pub use engine::{QueryEngine, MAX_ANCESTOR_DEPTH};
pub use error::{QueryError, Result};
pub use service::{ResponseProfile, TopicResponse, TopicService};
pub use skgif::{
    ContextEntry, DataSource, DataSourceNode, ExternalIdentifier, FlatTopic, GraphDocument,
    GraphFormatter, GraphNode, NodeRef, PageMeta, ResultPage, TopicNode, TopicRef,
};
