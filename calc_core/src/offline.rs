//! # Offline Cache
//!
//! A named cache generation filled from a fixed allow-list of paths.
//!
//! ## Lifecycle
//!
//! 1. **install** - fetch every allow-listed path; all succeed or nothing
//!    is stored
//! 2. **fetch** - serve from the current generation, fall back to the
//!    network on a miss (misses are not stored)
//! 3. **activate** - delete every generation except the current one
//!
//! Bumping the generation name (`kceva-cache-v2`) and reinstalling is how
//! stale assets are retired. [`OfflineCache::persist`] mirrors the held
//! generations to a directory and [`OfflineCache::open`] reads them back.

use std::collections::{BTreeMap, HashMap};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Response {
            status: 200,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where responses come from when the cache misses
pub trait Fetcher {
    fn fetch(&self, path: &str) -> CalcResult<Response>;
}

/// Whether a response came from the cache or the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

#[derive(Debug, Default)]
pub struct OfflineCache {
    current: String,
    allow_list: Vec<String>,
    generations: BTreeMap<String, HashMap<String, Response>>,
}

impl OfflineCache {
    pub fn new(name: impl Into<String>, allow_list: Vec<String>) -> Self {
        OfflineCache {
            current: name.into(),
            allow_list,
            generations: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.cache_name.clone(), config.precache_urls.clone())
    }

    pub fn name(&self) -> &str {
        &self.current
    }

    pub fn allow_list(&self) -> &[String] {
        &self.allow_list
    }

    /// Generation names currently held
    pub fn generations(&self) -> impl Iterator<Item = &str> {
        self.generations.keys().map(String::as_str)
    }

    /// Keep an existing generation around, e.g. one restored from a
    /// previous install under another name.
    pub fn insert_generation(&mut self, name: impl Into<String>, entries: HashMap<String, Response>) {
        self.generations.insert(name.into(), entries);
    }

    /// Fetch the whole allow-list into the current generation.
    ///
    /// # Errors
    ///
    /// `NetworkError` for the first path that fails or returns a non-2xx
    /// status; the cache is left as it was.
    pub fn install(&mut self, fetcher: &dyn Fetcher) -> CalcResult<usize> {
        let mut staged = HashMap::with_capacity(self.allow_list.len());
        for path in &self.allow_list {
            let response = fetcher.fetch(path)?;
            if !response.is_success() {
                return Err(CalcError::NetworkError {
                    url: path.clone(),
                    reason: format!("status {}", response.status),
                });
            }
            staged.insert(path.clone(), response);
        }
        let count = staged.len();
        self.generations.insert(self.current.clone(), staged);
        tracing::debug!(cache = %self.current, entries = count, "offline cache installed");
        Ok(count)
    }

    /// Cache-first lookup
    pub fn fetch(&self, path: &str, fetcher: &dyn Fetcher) -> CalcResult<(Response, Source)> {
        if let Some(hit) = self.cached(path) {
            return Ok((hit.clone(), Source::Cache));
        }
        fetcher.fetch(path).map(|response| (response, Source::Network))
    }

    pub fn cached(&self, path: &str) -> Option<&Response> {
        self.generations.get(&self.current)?.get(path)
    }

    /// Drop every generation but the current one; returns the names removed
    pub fn activate(&mut self) -> Vec<String> {
        let stale: Vec<String> = self
            .generations
            .keys()
            .filter(|name| **name != self.current)
            .cloned()
            .collect();
        for name in &stale {
            self.generations.remove(name);
        }
        if !stale.is_empty() {
            tracing::debug!(cache = %self.current, removed = ?stale, "old cache generations deleted");
        }
        stale
    }
}

// ============================================================================
// Static Directory Fetcher
// ============================================================================

/// Serves site paths from a build output directory (`/` maps to
/// `index.html`).
#[cfg(not(target_arch = "wasm32"))]
pub struct DirectoryFetcher {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryFetcher {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        DirectoryFetcher { root: root.into() }
    }

    fn content_type(path: &std::path::Path) -> &'static str {
        match path.extension().and_then(|e| e.to_str()) {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("xml") => "application/xml",
            Some("txt") => "text/plain; charset=utf-8",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Fetcher for DirectoryFetcher {
    fn fetch(&self, path: &str) -> CalcResult<Response> {
        let relative = path.trim_start_matches('/');
        if relative.split('/').any(|part| part == "..") {
            return Err(CalcError::NetworkError {
                url: path.to_string(),
                reason: "path escapes the site root".to_string(),
            });
        }
        let mut file = self.root.join(relative);
        if relative.is_empty() || relative.ends_with('/') {
            file = file.join("index.html");
        }
        match std::fs::read(&file) {
            Ok(body) => Ok(Response::ok(Self::content_type(&file), body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Response {
                status: 404,
                content_type: "text/plain; charset=utf-8".to_string(),
                body: b"Not Found".to_vec(),
            }),
            Err(e) => Err(CalcError::NetworkError {
                url: path.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

// ============================================================================
// On-disk Generations
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
const MANIFEST: &str = "manifest.json";

/// One cached response as listed in a generation's manifest
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    path: String,
    status: u16,
    content_type: String,
    /// Body file inside the generation directory
    file: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl OfflineCache {
    /// Cache named after `config`, with every generation previously
    /// persisted under `root` loaded back. A missing `root` is an empty
    /// cache.
    pub fn open(root: &Path, config: &SiteConfig) -> CalcResult<Self> {
        let mut cache = Self::from_config(config);
        let dirs = match fs::read_dir(root) {
            Ok(dirs) => dirs,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(cache),
            Err(e) => return Err(io_error("read", root, e)),
        };
        for dir in dirs {
            let dir = dir.map_err(|e| io_error("read", root, e))?.path();
            if !dir.join(MANIFEST).is_file() {
                continue;
            }
            let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let manifest = fs::read_to_string(dir.join(MANIFEST)).map_err(|e| io_error("read", &dir, e))?;
            let stored: Vec<StoredEntry> = serde_json::from_str(&manifest)?;
            let mut entries = HashMap::with_capacity(stored.len());
            for entry in stored {
                let body = fs::read(dir.join(&entry.file)).map_err(|e| io_error("read", &dir, e))?;
                let response = Response {
                    status: entry.status,
                    content_type: entry.content_type,
                    body,
                };
                entries.insert(entry.path, response);
            }
            cache.generations.insert(name.to_string(), entries);
        }
        tracing::debug!(root = %root.display(), generations = cache.generations.len(), "offline cache opened");
        Ok(cache)
    }

    /// Mirror the held generations under `root`: each one is written to its
    /// own directory and directories of dropped generations are removed.
    pub fn persist(&self, root: &Path) -> CalcResult<()> {
        fs::create_dir_all(root).map_err(|e| io_error("write", root, e))?;
        for (name, entries) in &self.generations {
            let dir = root.join(name);
            if dir.exists() {
                fs::remove_dir_all(&dir).map_err(|e| io_error("remove", &dir, e))?;
            }
            fs::create_dir_all(&dir).map_err(|e| io_error("write", &dir, e))?;

            let mut paths: Vec<&String> = entries.keys().collect();
            paths.sort();
            let mut manifest = Vec::with_capacity(paths.len());
            for (i, path) in paths.into_iter().enumerate() {
                let response = &entries[path];
                let file = format!("{}.body", i);
                fs::write(dir.join(&file), &response.body).map_err(|e| io_error("write", &dir, e))?;
                manifest.push(StoredEntry {
                    path: path.clone(),
                    status: response.status,
                    content_type: response.content_type.clone(),
                    file,
                });
            }
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(dir.join(MANIFEST), json).map_err(|e| io_error("write", &dir, e))?;
        }

        for dir in fs::read_dir(root).map_err(|e| io_error("read", root, e))? {
            let dir = dir.map_err(|e| io_error("read", root, e))?.path();
            let held = dir
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| self.generations.contains_key(n));
            if !held && dir.join(MANIFEST).is_file() {
                fs::remove_dir_all(&dir).map_err(|e| io_error("remove", &dir, e))?;
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn io_error(operation: &str, path: &Path, e: std::io::Error) -> CalcError {
    CalcError::storage(operation, path.display().to_string(), e.to_string())
}
