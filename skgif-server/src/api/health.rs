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

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::api::AppState;

/// Health check response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub concepts: usize,
    pub languages: usize,
    pub index_entries: usize,
}

/// GET /health
///
/// Always 200. `degraded` means the thesaurus failed to load and every
/// search will come back empty.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");

    let catalog = state.service.catalog();
    let stats = catalog.index().stats();

    Json(HealthResponse {
        status: if catalog.is_empty() {
            "degraded".to_string()
        } else {
            "healthy".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        concepts: catalog.store().len(),
        languages: stats.languages.len(),
        index_entries: stats.total_entries,
    })
}
