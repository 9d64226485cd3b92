//! Configuration and tuning constants.
//!
//! This module contains:
//! - `Config` - optional TOML settings file (`cgtier.toml`)
//! - Sync, resolver and HTTP constants

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Playlist request pacing.
pub mod sync {
    /// Delay (in ms) inserted after every save/delete request.
    pub const REQUEST_DELAY_MS: u64 = 250;
}

/// In-game ID selection.
pub mod resolver {
    /// In-game IDs at or above this value belong to INFINITAS releases.
    pub const ALTERNATE_PLATFORM_ID_THRESHOLD: u32 = 80000;
}

/// HTTP client settings.
pub mod http {
    /// Global timeout for a single request.
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Default config file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "cgtier.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Playlists page URL, e.g. `https://cgate.dev/iidx/playlists`
    pub page_url: Option<String>,
    /// Raw `Cookie` header value carrying the web UI session
    pub cookie: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            delay_ms: sync::REQUEST_DELAY_MS,
        }
    }
}

impl SyncConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
