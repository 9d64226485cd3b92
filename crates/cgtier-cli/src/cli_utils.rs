//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use cgtier_core::{Config, LogSink, PageContext, TierListData};
use tracing::{info, warn};

use crate::cli::PageArgs;

/// Load the config file, falling back to defaults when absent or invalid
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

pub fn load_tierlist(path: &Path) -> Result<TierListData> {
    TierListData::load(path)
        .with_context(|| format!("Failed to load tier list data from {}", path.display()))
}

/// Resolve page URL and cookie: args > config file
pub fn resolve_page(args: &PageArgs, config: &Config) -> Result<(String, Option<String>)> {
    let page_url = args
        .page_url
        .clone()
        .or_else(|| config.site.page_url.clone())
        .context("No playlists page URL. Use --page-url, CGTIER_PAGE_URL env, or [site] page_url in the config file.")?;
    let cookie = args.cookie.clone().or_else(|| config.site.cookie.clone());
    Ok((page_url, cookie))
}

pub fn page_context(args: &PageArgs) -> PageContext {
    PageContext {
        game_version: args.game_version.clone(),
        playlist_count: args.playlists,
        max_songs_per_playlist: args.max_songs,
    }
}

/// Run transcript printed as it happens
pub struct StderrLog;

impl LogSink for StderrLog {
    fn append(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
