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

//! HTTP tests for the topic routes

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use skgif_core::{ConceptRecord, ConceptStore};
use skgif_query::TopicCatalog;
use skgif_server::{build_router, build_state, config::ServerConfig};
use std::io::Write;
use tower::ServiceExt;

const POVERTY: &str = "http://purl.org/elsst/4/en/3";

fn sample_catalog() -> TopicCatalog {
    TopicCatalog::new(ConceptStore::from_records(vec![
        ConceptRecord::new("http://purl.org/elsst/4/en/1").with_pref_label("en", "Society"),
        ConceptRecord::new("http://purl.org/elsst/4/en/2")
            .with_pref_label("en", "Social problems")
            .with_broader("http://purl.org/elsst/4/en/1"),
        ConceptRecord::new(POVERTY)
            .with_pref_label("en", "Poverty")
            .with_pref_label("de", "Armut")
            .with_alt_label("en", "Destitution")
            .with_broader("http://purl.org/elsst/4/en/2"),
    ]))
}

fn app_with(catalog: TopicCatalog, config: &ServerConfig) -> Router {
    build_router(build_state(catalog, config), config)
}

fn app() -> Router {
    app_with(sample_catalog(), &ServerConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_filter_profile_returns_matches_only() {
    let (status, body) = get(
        app(),
        "/topics?filter=cf.search.labels:pov,cf.search.language:en",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "meta": { "count": 1, "page": 0, "page_size": 0 },
            "results": [{
                "local_identifier": POVERTY,
                "identifiers": [],
                "entity_type": "topic",
                "labels": { "de": "Armut", "en": "Poverty" }
            }]
        })
    );
}

#[tokio::test]
async fn test_filter_language_defaults_and_switches() {
    let (_, body) = get(app(), "/api/topics?filter=cf.search.labels:armut").await;
    assert_eq!(body["meta"]["count"], 0);

    let (_, body) = get(
        app(),
        "/api/topics?filter=cf.search.labels:armut,cf.search.language:de",
    )
    .await;
    assert_eq!(body["meta"]["count"], 1);
}

#[tokio::test]
async fn test_legacy_profile_returns_hierarchy() {
    let (status, body) = get(app(), "/api/topics?q=destitution").await;
    assert_eq!(status, StatusCode::OK);

    let graph = body["@graph"].as_array().unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph[0]["@type"], "DataSource");

    let ids: Vec<&str> = graph[1..]
        .iter()
        .map(|node| node["local_identifier"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "http://purl.org/elsst/4/en/1",
            "http://purl.org/elsst/4/en/2",
            POVERTY
        ]
    );
    assert_eq!(graph[3]["alternate_name"], json!(["Destitution"]));
    assert_eq!(
        body["@context"][1]["@base"],
        "https://w3id.org/skg-if/sandbox/cessda-elsst/"
    );
}

#[tokio::test]
async fn test_filter_wins_over_q() {
    let (status, body) = get(app(), "/topics?q=society&filter=cf.search.labels:poverty").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 1);
    assert!(body.get("@graph").is_none());
}

#[tokio::test]
async fn test_repeated_filter_keeps_last_value() {
    let (status, body) = get(
        app(),
        "/topics?filter=cf.search.labels:society&filter=cf.search.labels:poverty",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["results"][0]["local_identifier"], POVERTY);
}

#[tokio::test]
async fn test_repeated_q_keeps_last_value() {
    let (status, body) = get(app(), "/api/topics?q=zzzz&q=poverty").await;
    assert_eq!(status, StatusCode::OK);
    let graph = body["@graph"].as_array().unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph[3]["local_identifier"], POVERTY);
}

#[tokio::test]
async fn test_invalid_filters_are_422() {
    let cases = [
        (
            "/topics?filter=cf.search.labels:pov,cf.search.language:x",
            "value_error.pattern",
        ),
        ("/topics?filter=cf.search.labels:po", "value_error.missing"),
        (
            "/topics?filter=cf.search.labels:pov&filter=cf.search.labels:po",
            "value_error.missing",
        ),
        ("/topics?filter=nonsense", "value_error.format"),
        ("/topics", "value_error.missing"),
    ];

    for (uri, kind) in cases {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert_eq!(body["detail"][0]["type"], kind, "{}", uri);
        assert_eq!(body["detail"][0]["loc"], json!(["query", "filter"]), "{}", uri);
    }
}

#[tokio::test]
async fn test_short_legacy_query_is_422() {
    let (status, body) = get(app(), "/api/topics?q=po").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["query", "q"]));
}

#[tokio::test]
async fn test_lookup_by_encoded_id() {
    let (status, body) = get(app(), "/api/topics/http%3A%2F%2Fpurl.org%2Felsst%2F4%2Fen%2F3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["@graph"].as_array().unwrap().len(), 1);
    assert_eq!(body["@graph"][0]["local_identifier"], POVERTY);
    assert_eq!(body["@graph"][0]["labels"]["en"], "Poverty");
    assert_eq!(
        body["@context"][0],
        "https://w3id.org/skg-if/context/1.0.1/skg-if.json"
    );
}

#[tokio::test]
async fn test_lookup_unknown_id_is_404() {
    let (status, body) = get(app(), "/topics/urn%3Amissing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "detail": "Topic with ID 'urn:missing' not found." })
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["concepts"], 3);
    assert_eq!(body["languages"], 2);
    assert_eq!(body["index_entries"], 5);

    let (status, body) = get(
        app_with(TopicCatalog::default(), &ServerConfig::default()),
        "/health",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_debug_endpoint_is_opt_in() {
    let (status, _) = get(app(), "/show_index_data").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut config = ServerConfig::default();
    config.server.enable_debug_endpoints = true;
    let (status, body) = get(app_with(sample_catalog(), &config), "/show_index_data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["elsst_data_sample"].as_object().unwrap().len(), 3);
    let en = body["search_index_sample"]["en"].as_array().unwrap();
    assert_eq!(en.len(), 4);
    for pair in en {
        let pair = pair.as_array().unwrap();
        assert_eq!(pair.len(), 2);
        assert!(body["elsst_data_sample"].get(pair[1].as_str().unwrap()).is_some());
    }
}

#[tokio::test]
async fn test_serves_loaded_file_and_survives_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"@graph": [{{
            "@id": "urn:x:labour",
            "@type": "http://www.w3.org/2004/02/skos/core#Concept",
            "http://www.w3.org/2004/02/skos/core#prefLabel": [
                {{"@language": "en", "@value": "Labour market"}}
            ]
        }}]}}"#
    )
    .unwrap();

    let config = ServerConfig::default();
    let (_, body) = get(
        app_with(TopicCatalog::load(file.path()), &config),
        "/topics?filter=cf.search.labels:LABOUR",
    )
    .await;
    assert_eq!(body["results"][0]["local_identifier"], "urn:x:labour");

    let (status, body) = get(
        app_with(TopicCatalog::load("/nonexistent/elsst.jsonld"), &config),
        "/topics?filter=cf.search.labels:labour",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 0);
}
