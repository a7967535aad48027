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

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a thesaurus export could not be read.
///
/// None of these are fatal to the service: [`crate::load_path`] logs them
/// and falls back to an empty store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("could not decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
