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

use anyhow::Result;
use serde::{Deserialize, Serialize};
use skgif_query::skgif::{DEFAULT_BASE_URL, DEFAULT_CONTEXT_URL};
use skgif_query::{DataSource, GraphFormatter};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::validation::is_language_code;

/// SKG-IF Topics Server Configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub skgif: SkgifConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// HTTP API listen address (e.g., "127.0.0.1:8000")
    #[serde(default = "default_http_addr")]
    pub listen_addr: String,

    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve `/show_index_data`
    #[serde(default)]
    pub enable_debug_endpoints: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_http_addr(),
            enable_cors: default_enable_cors(),
            cors_origins: vec![],
            enable_debug_endpoints: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// JSON-LD thesaurus export read once at startup
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkgifConfig {
    /// Prefix for minted topic `@id`s, also emitted as `@base`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_context_url")]
    pub context_url: String,

    /// Search language when none is given, and display language of the
    /// legacy `q` profile
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Minimum search term length, in characters
    #[serde(default = "default_min_term_length")]
    pub min_term_length: usize,

    #[serde(default)]
    pub data_source: DataSource,
}

impl Default for SkgifConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            context_url: default_context_url(),
            default_language: default_language(),
            min_term_length: default_min_term_length(),
            data_source: DataSource::default(),
        }
    }
}

impl SkgifConfig {
    pub fn formatter(&self) -> GraphFormatter {
        GraphFormatter::new(&self.base_url, &self.context_url, self.data_source.clone())
    }
}

// Default values
fn default_http_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_enable_cors() -> bool {
    true
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data/elsst_current.jsonld")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_context_url() -> String {
    DEFAULT_CONTEXT_URL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_min_term_length() -> usize {
    3
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - SKGIF_HTTP_ADDR: HTTP listen address (default: 127.0.0.1:8000)
    /// - SKGIF_DATA_FILE: JSON-LD export path (default: data/elsst_current.jsonld)
    /// - SKGIF_BASE_URL: Base URL for minted topic identifiers
    /// - SKGIF_CONTEXT_URL: JSON-LD context URL
    /// - SKGIF_DEFAULT_LANGUAGE: Default search language (default: en)
    /// - SKGIF_ENABLE_CORS: Enable CORS (default: true)
    /// - SKGIF_DEBUG_ENDPOINTS: Serve /show_index_data (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("SKGIF_HTTP_ADDR") {
            config.server.listen_addr = addr;
        }

        if let Ok(cors) = std::env::var("SKGIF_ENABLE_CORS") {
            config.server.enable_cors = cors.parse().unwrap_or(true);
        }

        if let Ok(debug) = std::env::var("SKGIF_DEBUG_ENDPOINTS") {
            config.server.enable_debug_endpoints = debug.parse().unwrap_or(false);
        }

        if let Ok(path) = std::env::var("SKGIF_DATA_FILE") {
            config.data.source_path = PathBuf::from(path);
        }

        if let Ok(base_url) = std::env::var("SKGIF_BASE_URL") {
            config.skgif.base_url = base_url;
        }

        if let Ok(context_url) = std::env::var("SKGIF_CONTEXT_URL") {
            config.skgif.context_url = context_url;
        }

        if let Ok(lang) = std::env::var("SKGIF_DEFAULT_LANGUAGE") {
            config.skgif.default_language = lang;
        }

        config
    }

    /// Load configuration with priority: env > file > defaults
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = config_file {
            if path.exists() {
                tracing::info!("Loading configuration from file: {:?}", path);
                Self::from_file(&path)?
            } else {
                tracing::warn!("Config file not found: {:?}, using defaults", path);
                Self::default()
            }
        } else {
            Self::default()
        };

        config = Self::merge_with_env(config);

        Ok(config)
    }

    /// Merge config with environment variables (env takes priority)
    fn merge_with_env(mut config: Self) -> Self {
        let env_config = Self::from_env();

        // Only override if env var was explicitly set
        if std::env::var("SKGIF_HTTP_ADDR").is_ok() {
            config.server.listen_addr = env_config.server.listen_addr;
        }
        if std::env::var("SKGIF_ENABLE_CORS").is_ok() {
            config.server.enable_cors = env_config.server.enable_cors;
        }
        if std::env::var("SKGIF_DEBUG_ENDPOINTS").is_ok() {
            config.server.enable_debug_endpoints = env_config.server.enable_debug_endpoints;
        }
        if std::env::var("SKGIF_DATA_FILE").is_ok() {
            config.data.source_path = env_config.data.source_path;
        }
        if std::env::var("SKGIF_BASE_URL").is_ok() {
            config.skgif.base_url = env_config.skgif.base_url;
        }
        if std::env::var("SKGIF_CONTEXT_URL").is_ok() {
            config.skgif.context_url = env_config.skgif.context_url;
        }
        if std::env::var("SKGIF_DEFAULT_LANGUAGE").is_ok() {
            config.skgif.default_language = env_config.skgif.default_language;
        }

        config
    }

    /// Parse listen address as SocketAddr
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server.listen_addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if !is_language_code(&self.skgif.default_language) {
            anyhow::bail!(
                "default_language must be a 2-letter ISO 639-1 code, got '{}'",
                self.skgif.default_language
            );
        }

        if self.skgif.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }

        if self.skgif.min_term_length == 0 {
            anyhow::bail!("min_term_length must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8000");
        assert!(config.server.enable_cors);
        assert!(!config.server.enable_debug_endpoints);
        assert_eq!(
            config.data.source_path,
            PathBuf::from("data/elsst_current.jsonld")
        );
        assert_eq!(config.skgif.default_language, "en");
        assert_eq!(config.skgif.min_term_length, 3);
        assert_eq!(config.skgif.data_source.id, "urn:cessda:elsst-v5");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
listen_addr = "0.0.0.0:9000"

[skgif]
default_language = "de"

[skgif.data_source]
name = "Custom thesaurus"
"#
        )
        .unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:9000");
        assert!(config.server.enable_cors);
        assert_eq!(config.skgif.default_language, "de");
        assert_eq!(config.skgif.min_term_length, 3);
        assert_eq!(config.skgif.data_source.name, "Custom thesaurus");
        assert_eq!(config.skgif.data_source.local_identifier, "elsst-v5");
        assert_eq!(
            config.data.source_path,
            PathBuf::from("data/elsst_current.jsonld")
        );
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("SKGIF_CONTEXT_URL", "https://example.org/context.json");
        std::env::set_var("SKGIF_DEBUG_ENDPOINTS", "true");

        let config = ServerConfig::from_env();
        assert_eq!(config.skgif.context_url, "https://example.org/context.json");
        assert!(config.server.enable_debug_endpoints);

        std::env::remove_var("SKGIF_CONTEXT_URL");
        std::env::remove_var("SKGIF_DEBUG_ENDPOINTS");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.server.listen_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.skgif.default_language = "eng".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.skgif.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.skgif.min_term_length = 0;
        assert!(config.validate().is_err());
    }
}
