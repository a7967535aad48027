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

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use skgif_query::{FlatTopic, GraphDocument, ResponseProfile, TopicResponse};
use tracing::debug;

use crate::api::{ApiError, AppState, ValidationIssue};
use crate::validation::{missing_filter, parse_filter, parse_legacy_query};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TopicsParams {
    /// Legacy search term
    pub q: Option<String>,
    /// `cf.search.labels:<term>,cf.search.language:<lang>`
    pub filter: Option<String>,
}

impl TopicsParams {
    /// Collect decoded query pairs. A repeated parameter keeps its last
    /// value; unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = Some(value),
                "filter" => params.filter = Some(value),
                _ => {}
            }
        }
        params
    }
}

fn malformed_query(rejection: QueryRejection) -> ApiError {
    ApiError::Validation(ValidationIssue::filter(
        rejection.body_text(),
        "value_error.format",
    ))
}

/// GET /topics - Topic suggestions
///
/// `filter` selects the flat result page; `q` selects the full hierarchy
/// graph. `filter` wins when both are present.
pub async fn list_topics(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<TopicResponse>, ApiError> {
    let Query(pairs) = query.map_err(malformed_query)?;
    let params = TopicsParams::from_pairs(pairs);
    let settings = &state.settings;

    let (profile, request) = match (params.filter.as_deref(), params.q.as_deref()) {
        (Some(filter), _) => (
            ResponseProfile::FlatResult,
            parse_filter(filter, &settings.default_language, settings.min_term_length)?,
        ),
        (None, Some(q)) => (
            ResponseProfile::FullHierarchy,
            parse_legacy_query(q, &settings.default_language, settings.min_term_length)?,
        ),
        (None, None) => return Err(missing_filter()),
    };

    debug!(
        ?profile,
        term = %request.term,
        language = %request.language,
        "Topic search"
    );

    Ok(Json(state.service.suggest(
        profile,
        &request.term,
        &request.language,
    )))
}

/// GET /topics/{id} - Single topic by its full, URL-encoded identifier
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<Json<GraphDocument<FlatTopic>>, ApiError> {
    debug!(topic_id = %topic_id, "Topic lookup");
    Ok(Json(state.service.lookup(&topic_id)?))
}

/// Topic routes, mounted both at the root and under `/api`
pub fn topics_router() -> Router<AppState> {
    Router::new()
        .route("/topics", get(list_topics))
        .route("/topics/*topic_id", get(get_topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_params_last_value_wins() {
        let params = TopicsParams::from_pairs(pairs(&[
            ("filter", "cf.search.labels:xyz"),
            ("q", "pov"),
            ("filter", "cf.search.labels:pov"),
            ("q", "pove"),
            ("page", "2"),
        ]));
        assert_eq!(params.filter.as_deref(), Some("cf.search.labels:pov"));
        assert_eq!(params.q.as_deref(), Some("pove"));
    }

    #[test]
    fn test_params_empty() {
        assert_eq!(TopicsParams::from_pairs(Vec::new()), TopicsParams::default());
    }
}
