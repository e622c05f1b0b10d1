//! Site configuration
//!
//! Defaults, then an optional TOML file, then `KCEVA_*` environment
//! variables. Every field may be omitted from the file.
//!
//! ```toml
//! base_url = "https://staging.kceva.com"
//! storage_dir = "/var/lib/kceva"
//!
//! [resolver_aliases]
//! roi-calculator = "compound-interest"
//! savings-goal = ""   # drop a default alias
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{CalcError, CalcResult};

pub const BASE_URL_ENV: &str = "KCEVA_BASE_URL";
pub const STORAGE_DIR_ENV: &str = "KCEVA_STORAGE_DIR";

fn default_base_url() -> String {
    "https://kceva.com".to_string()
}

fn default_brand() -> String {
    "kceva".to_string()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".kceva")
}

fn default_cache_name() -> String {
    "kceva-cache-v1".to_string()
}

fn default_precache_urls() -> Vec<String> {
    [
        "/",
        "/favicon.svg",
        "/favicon-32x32.png",
        "/favicon-16x16.png",
        "/apple-touch-icon.png",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin used in sitemap, robots and structured data
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_brand")]
    pub brand: String,

    /// Directory holding persisted history, preferences and theme
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Offline cache generation name
    #[serde(default = "default_cache_name")]
    pub cache_name: String,

    /// Paths stored on offline install
    #[serde(default = "default_precache_urls")]
    pub precache_urls: Vec<String>,

    /// Calculator id to unit key; an empty key removes a default alias
    #[serde(default)]
    pub resolver_aliases: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            brand: default_brand(),
            storage_dir: default_storage_dir(),
            cache_name: default_cache_name(),
            precache_urls: default_precache_urls(),
            resolver_aliases: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(|e| CalcError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validated()
    }

    /// Read `path` if given (a missing file is an error), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> CalcResult<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
                    reason: format!("cannot read {}: {}", path.display(), e),
                })?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `KCEVA_BASE_URL` / `KCEVA_STORAGE_DIR` as reported by `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> CalcResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
        if let Some(dir) = lookup(STORAGE_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.storage_dir = PathBuf::from(dir.trim());
        }
        self.validated()
    }

    /// Check the base URL and strip any trailing slash.
    fn validated(mut self) -> CalcResult<Self> {
        let parsed = Url::parse(&self.base_url).map_err(|e| CalcError::ConfigError {
            reason: format!("base_url '{}': {}", self.base_url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CalcError::ConfigError {
                reason: format!("base_url must be http(s), got '{}'", parsed.scheme()),
            });
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.cache_name.trim().is_empty() {
            return Err(CalcError::ConfigError {
                reason: "cache_name must not be empty".to_string(),
            });
        }
        Ok(self)
    }

    /// Absolute URL for a site path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
