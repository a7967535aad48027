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

//! JSON-LD keywords and SKOS IRIs understood by the loader.
//!
//! Exports are expected in expanded form, so SKOS properties appear as full
//! IRIs rather than `skos:` compact names.

pub const JSONLD_GRAPH: &str = "@graph";
pub const JSONLD_ID: &str = "@id";
pub const JSONLD_TYPE: &str = "@type";
pub const JSONLD_LANGUAGE: &str = "@language";
pub const JSONLD_VALUE: &str = "@value";

pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
pub const SKOS_ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
pub const SKOS_BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
