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

pub mod debug;
pub mod health;
pub mod topics;

pub use debug::show_index_data;
pub use health::health_check;
pub use topics::{get_topic, list_topics, topics_router};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use skgif_query::{QueryError, TopicService};
use std::sync::Arc;
use thiserror::Error;

/// Search settings the handlers validate against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub default_language: String,
    pub min_term_length: usize,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TopicService>,
    pub settings: Arc<SearchSettings>,
}

impl AppState {
    pub fn new(service: TopicService, settings: SearchSettings) -> Self {
        Self {
            service: Arc::new(service),
            settings: Arc::new(settings),
        }
    }
}

/// One entry of a 422 `detail` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationIssue {
    pub fn new(param: &str, msg: String, kind: &'static str) -> Self {
        Self {
            loc: vec!["query".to_string(), param.to_string()],
            msg,
            kind,
        }
    }

    /// Issue located at the `filter` query parameter
    pub fn filter(msg: String, kind: &'static str) -> Self {
        Self::new("filter", msg, kind)
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.msg)]
    Validation(ValidationIssue),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": msg }))).into_response()
            }
            ApiError::Validation(issue) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": [issue] })),
            )
                .into_response(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::TopicNotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}
