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

pub mod api;
pub mod config;
pub mod validation;

use anyhow::Result;
use axum::{http::HeaderValue, routing::get, Router};
use skgif_query::{TopicCatalog, TopicService};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{health_check, show_index_data, topics_router, AppState, SearchSettings};
use config::ServerConfig;

/// Shared state over an already loaded catalog
pub fn build_state(catalog: TopicCatalog, config: &ServerConfig) -> AppState {
    let service = TopicService::new(Arc::new(catalog), config.skgif.formatter());
    let settings = SearchSettings {
        default_language: config.skgif.default_language.clone(),
        min_term_length: config.skgif.min_term_length,
    };
    AppState::new(service, settings)
}

/// Full application router: topic routes at the root and under `/api`,
/// plus `/health` and the optional `/show_index_data`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .merge(topics_router())
        .nest("/api", topics_router());

    if config.server.enable_debug_endpoints {
        tracing::warn!("Debug endpoint /show_index_data enabled");
        app = app.route("/show_index_data", get(show_index_data));
    }

    app.with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if !config.server.enable_cors {
        return CorsLayer::new();
    }

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.server.cors_origins.is_empty() {
        tracing::info!("CORS: Allowing all origins");
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("CORS: Ignoring invalid origin {:?}", origin);
                None
            }
        })
        .collect();
    tracing::info!("CORS: Allowing origins: {:?}", config.server.cors_origins);
    cors.allow_origin(AllowOrigin::list(origins))
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skgif_server=info,skgif_core=info,skgif_index=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SKG-IF Topics Server");
    tracing::info!("Configuration: {:#?}", config);

    config.validate()?;

    // The thesaurus is read once, before the listener binds
    let source_path = config.data.source_path.clone();
    let catalog = tokio::task::spawn_blocking(move || TopicCatalog::load(source_path)).await?;
    if catalog.is_empty() {
        tracing::warn!("No concepts loaded; all searches will return empty results");
    }

    let state = build_state(catalog, &config);
    let app = build_router(state, &config);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    tracing::info!("HTTP server stopped");

    Ok(())
}
