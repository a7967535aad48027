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

//! Input validation for topic search requests
//!
//! Failures are reported as [`ApiError::Validation`] so they render as
//! structured 422 bodies.

use crate::api::{ApiError, ValidationIssue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Filter key holding the search term
pub const LABELS_KEY: &str = "cf.search.labels";
/// Filter key holding the search language
pub const LANGUAGE_KEY: &str = "cf.search.language";

static LANGUAGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}$").expect("Invalid language code pattern"));

/// A validated search: term and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub language: String,
}

/// Two lowercase ASCII letters (ISO 639-1 shape).
pub fn is_language_code(value: &str) -> bool {
    LANGUAGE_CODE.is_match(value)
}

/// Parse `cf.search.labels:<term>,cf.search.language:<lang>`.
///
/// Each comma-separated part is split on its first `:`; keys and values are
/// trimmed. Unknown keys are ignored and a repeated key keeps its last value.
pub fn parse_filter(
    filter: &str,
    default_language: &str,
    min_term_length: usize,
) -> Result<SearchRequest, ApiError> {
    let mut params = HashMap::new();
    for part in filter.split(',') {
        let (key, value) = part.split_once(':').ok_or_else(malformed_filter)?;
        params.insert(key.trim(), value.trim());
    }

    let term = match params.get(LABELS_KEY) {
        Some(term) if term.chars().count() >= min_term_length => term.to_string(),
        _ => {
            return Err(ApiError::Validation(ValidationIssue::filter(
                format!(
                    "A '{}' key with a value of at least {} characters must be provided in the filter.",
                    LABELS_KEY, min_term_length
                ),
                "value_error.missing",
            )))
        }
    };

    let language = params.get(LANGUAGE_KEY).copied().unwrap_or(default_language);
    if !is_language_code(language) {
        return Err(ApiError::Validation(ValidationIssue::filter(
            format!(
                "If provided, the value for '{}' must be a 2-letter ISO 639-1 code.",
                LANGUAGE_KEY
            ),
            "value_error.pattern",
        )));
    }

    Ok(SearchRequest {
        term,
        language: language.to_string(),
    })
}

/// Validate the legacy `q` parameter; the language is always the default.
pub fn parse_legacy_query(
    q: &str,
    default_language: &str,
    min_term_length: usize,
) -> Result<SearchRequest, ApiError> {
    if q.chars().count() < min_term_length {
        return Err(ApiError::Validation(ValidationIssue::new(
            "q",
            format!("ensure this value has at least {} characters", min_term_length),
            "value_error.any_str.min_length",
        )));
    }

    Ok(SearchRequest {
        term: q.to_string(),
        language: default_language.to_string(),
    })
}

/// Neither `filter` nor `q` was supplied.
pub fn missing_filter() -> ApiError {
    ApiError::Validation(ValidationIssue::filter(
        "field required".to_string(),
        "value_error.missing",
    ))
}

fn malformed_filter() -> ApiError {
    ApiError::Validation(ValidationIssue::filter(
        "Filter parameter is malformed. Expected format: 'key1:value1,key2:value2'.".to_string(),
        "value_error.format",
    ))
}
