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

//! SKG-IF Topics Index Layer
//!
//! Per-language posting lists of lowercased labels, derived once from a
//! [`skgif_core::ConceptStore`].
//!
//! ## Layout
//!
//! ```text
//! "en" ─► [("poverty", urn:1), ("destitution", urn:1), ("social problems", urn:0), ...]
//! "de" ─► [("armut", urn:1), ...]
//! ```
//!
//! Entries are appended in store order, preferred labels before alternative
//! labels of the same concept. Nothing is deduplicated; callers that need
//! distinct concepts deduplicate by concept id.

pub mod label_index;

pub use label_index::{IndexEntry, IndexStats, LabelIndex};
