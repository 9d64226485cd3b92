//! Tier list control panel.
//!
//! Ties the loaded dataset, the page state and the sync driver together:
//! pick a tier, keep the songs available in the page's game version, pack
//! them into playlists and write them out.

use tracing::info;

use crate::error::{Error, Result};
use crate::playlist::{PackOptions, PageContext, PlaylistChunk, TierSelection, pack_playlists};
use crate::sync::{LogSink, PlaylistHost, RequestThrottle, SyncDriver, SyncReport};
use crate::tierlist::{PlayStyle, TierListData};

pub struct TierlistPanel<'a, T: RequestThrottle> {
    data: &'a TierListData,
    page: PageContext,
    driver: SyncDriver<T>,
}

impl<'a, T: RequestThrottle> TierlistPanel<'a, T> {
    /// Fails when the page has no game version selected
    pub fn new(data: &'a TierListData, page: PageContext, driver: SyncDriver<T>) -> Result<Self> {
        if !page.playlists_supported() {
            return Err(Error::PlaylistsUnsupported);
        }
        Ok(Self { data, page, driver })
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    /// Tier list name, tier label and the tier's songs in the page's game version
    fn selected_songs(&self, selection: &TierSelection) -> Result<(&'a str, &'a str, Vec<u32>)> {
        let data: &'a TierListData = self.data;
        let (list, tier) = data.find_tier(
            selection.play_style,
            &selection.tier_list_name,
            &selection.tier,
        )?;

        let song_ids = tier
            .songs_for_version(&self.page.game_version)
            .iter()
            .map(|song| song.song_id)
            .collect();
        Ok((&list.tier_list_name, &tier.text, song_ids))
    }

    fn pack(
        &self,
        selection: &TierSelection,
        tier_list_name: &str,
        tier: &str,
        song_ids: &[u32],
    ) -> Vec<PlaylistChunk> {
        let options = PackOptions {
            start_offset: selection.start_offset,
            first_playlist_index: selection.first_playlist_index(),
            available_slots: self.page.playlist_count,
            capacity: self.page.max_songs_per_playlist,
        };
        pack_playlists(tier_list_name, tier, song_ids, &options)
    }

    /// Playlists an overwrite would write, without sending anything
    pub fn plan(&self, selection: &TierSelection) -> Result<Vec<PlaylistChunk>> {
        let (tier_list_name, tier, song_ids) = self.selected_songs(selection)?;
        Ok(self.pack(selection, tier_list_name, tier, &song_ids))
    }

    /// Overwrite playlists with the selected tier.
    ///
    /// A tier with no song in the current game version is reported in the log
    /// and nothing is sent.
    pub fn overwrite_playlists<H, L>(
        &self,
        host: &mut H,
        log: &mut L,
        selection: &TierSelection,
    ) -> Result<SyncReport>
    where
        H: PlaylistHost + ?Sized,
        L: LogSink + ?Sized,
    {
        log.append(&format!("Selected playstyle: {}", selection.play_style));
        log.append(&format!(
            "Selected tierlist name: {}",
            selection.tier_list_name
        ));
        log.append(&format!("Selected tier: {}", selection.tier));

        let (tier_list_name, tier, song_ids) = self.selected_songs(selection)?;
        if song_ids.is_empty() {
            info!(
                "Tier {} has no songs for version {}",
                selection.tier, self.page.game_version
            );
            log.append("This tier contains no songs for the current game version");
            return Ok(SyncReport::default());
        }

        let chunks = self.pack(selection, tier_list_name, tier, &song_ids);
        self.driver
            .overwrite(host, log, selection.play_style, &chunks)
    }

    /// Delete every playlist slot on the page
    pub fn delete_all_playlists<H, L>(
        &self,
        host: &mut H,
        log: &mut L,
        play_style: PlayStyle,
    ) -> Result<SyncReport>
    where
        H: PlaylistHost + ?Sized,
        L: LogSink + ?Sized,
    {
        self.driver
            .delete_all(host, log, play_style, self.page.playlist_count)
    }
}
