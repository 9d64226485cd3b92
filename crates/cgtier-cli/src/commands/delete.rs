//! Delete command: clear every playlist slot.

use anyhow::{Result, bail};
use cgtier_core::{
    CgPlaylistPage, Config, FixedDelay, HttpClient, PlayStyle, SyncDriver, TierListData,
    TierlistPanel,
};

use tracing::info;

use crate::cli::PageArgs;
use crate::cli_utils::{self, StderrLog};

pub fn run(page_args: &PageArgs, play_style: PlayStyle, config: &Config) -> Result<()> {
    // Deleting needs no tier data
    let data = TierListData::default();
    let driver = SyncDriver::new(FixedDelay::new(config.sync.delay()));
    let panel = TierlistPanel::new(&data, cli_utils::page_context(page_args), driver)?;

    let (page_url, cookie) = cli_utils::resolve_page(page_args, config)?;
    let mut host = CgPlaylistPage::new(page_url, HttpClient::new(cookie));
    info!("Deleting playlists on {}", host.page_url());
    let report = panel.delete_all_playlists(&mut host, &mut StderrLog, play_style)?;

    if !report.is_success() {
        bail!(
            "{} of {} playlists failed to delete",
            report.failed_count(),
            report.items.len()
        );
    }
    println!("Deleted {} playlists.", report.items.len());
    Ok(())
}
