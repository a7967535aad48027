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

//! SKG-IF Topics Core
//!
//! Concept records, the read-only concept store and the SKOS JSON-LD graph
//! loader that produces it.
//!
//! The store is built exactly once at startup and then shared read-only for
//! the lifetime of the process:
//!
//! ```text
//! JSON-LD export ──► loader ──► ConceptStore ──► (label index, query engine)
//! ```

pub mod concept;
pub mod error;
pub mod loader;
pub mod store;
pub mod vocab;

pub use concept::ConceptRecord;
pub use error::{LoadError, Result};
pub use loader::{load_path, load_str, load_value, try_load_path};
pub use store::ConceptStore;
