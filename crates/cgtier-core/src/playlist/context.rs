use crate::tierlist::PlayStyle;

/// Playlist page state as reported by the web UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Currently selected game version (`"31"`), empty when none is selected
    pub game_version: String,
    /// Number of playlist slots on the page
    pub playlist_count: usize,
    /// Maximum songs per playlist
    pub max_songs_per_playlist: usize,
}

impl PageContext {
    /// Playlists can only be edited once a game version is selected
    pub fn playlists_supported(&self) -> bool {
        !self.game_version.is_empty()
    }
}

/// Tier chosen in the control panel and where to write it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSelection {
    pub play_style: PlayStyle,
    pub tier_list_name: String,
    pub tier: String,
    /// Songs of the tier to skip before the first playlist
    pub start_offset: usize,
    /// First playlist to overwrite, 1-based as shown on the page
    pub first_playlist: usize,
}

impl TierSelection {
    /// Zero-based index of the first playlist slot to overwrite
    pub fn first_playlist_index(&self) -> usize {
        self.first_playlist.saturating_sub(1)
    }
}
