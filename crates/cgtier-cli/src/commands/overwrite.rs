//! Overwrite command: write a tier into the web UI's playlists.

use std::path::Path;

use anyhow::{Result, bail};
use cgtier_core::{
    CgPlaylistPage, Config, FixedDelay, HttpClient, PlayStyle, SyncDriver, TierSelection,
    TierlistPanel,
};

use tracing::info;

use crate::cli::PageArgs;
use crate::cli_utils::{self, StderrLog};

pub struct OverwriteOptions<'a> {
    pub tierlist_path: &'a Path,
    pub play_style: PlayStyle,
    pub tier_list: &'a str,
    pub tier: &'a str,
    pub start_offset: usize,
    pub first_playlist: usize,
    pub dry_run: bool,
}

pub fn run(page_args: &PageArgs, options: OverwriteOptions<'_>, config: &Config) -> Result<()> {
    let data = cli_utils::load_tierlist(options.tierlist_path)?;
    let driver = SyncDriver::new(FixedDelay::new(config.sync.delay()));
    let panel = TierlistPanel::new(&data, cli_utils::page_context(page_args), driver)?;

    let selection = TierSelection {
        play_style: options.play_style,
        tier_list_name: options.tier_list.to_string(),
        tier: options.tier.to_string(),
        start_offset: options.start_offset,
        first_playlist: options.first_playlist,
    };

    if options.dry_run {
        let chunks = panel.plan(&selection)?;
        println!(
            "Game version {}, {} playlists of up to {} songs",
            panel.page().game_version,
            panel.page().playlist_count,
            panel.page().max_songs_per_playlist
        );
        if chunks.is_empty() {
            println!("This tier contains no songs for the current game version");
        }
        for chunk in &chunks {
            println!(
                "#{} {} ({} songs): {}",
                chunk.slot + 1,
                chunk.name,
                chunk.song_ids.len(),
                chunk
                    .song_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            );
        }
        return Ok(());
    }

    let (page_url, cookie) = cli_utils::resolve_page(page_args, config)?;
    let mut host = CgPlaylistPage::new(page_url, HttpClient::new(cookie));
    info!("Writing playlists to {}", host.page_url());
    let report = panel.overwrite_playlists(&mut host, &mut StderrLog, &selection)?;

    if !report.is_success() {
        bail!(
            "{} of {} playlists failed to save",
            report.failed_count(),
            report.items.len()
        );
    }
    if !report.items.is_empty() {
        println!("Saved {} playlists.", report.items.len());
    }
    Ok(())
}
