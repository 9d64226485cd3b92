use std::collections::HashMap;

use crate::config::resolver::ALTERNATE_PLATFORM_ID_THRESHOLD;
use crate::error::{Error, Result};
use crate::tachi::{InGameId, TachiChart, TachiSong};

/// Tachi songs indexed by Tachi song ID
#[derive(Debug, Clone, Default)]
pub struct SongIndex {
    songs: HashMap<u32, TachiSong>,
}

impl SongIndex {
    pub fn new(songs: Vec<TachiSong>) -> Self {
        Self {
            songs: songs.into_iter().map(|song| (song.id, song)).collect(),
        }
    }

    pub fn get(&self, song_id: u32) -> Option<&TachiSong> {
        self.songs.get(&song_id)
    }

    /// Song referenced by a chart; a dangling reference aborts the conversion
    pub fn resolve(&self, chart: &TachiChart) -> Result<&TachiSong> {
        self.get(chart.song_id)
            .ok_or(Error::SongNotFound(chart.song_id))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Pick the canonical in-game ID among several candidates.
///
/// INFINITAS IDs (at or above the threshold) are dropped and the highest
/// remaining ID wins; lower IDs are usually omnimix variants.
pub fn select_in_game_id(ids: &[u32]) -> Option<u32> {
    ids.iter()
        .copied()
        .filter(|&id| id < ALTERNATE_PLATFORM_ID_THRESHOLD)
        .max()
}

/// In-game ID to send to the web UI for this chart
pub fn resolve_in_game_id(chart: &TachiChart) -> Result<u32> {
    match &chart.data.in_game_id {
        InGameId::Single(id) => Ok(*id),
        InGameId::Multiple(ids) => select_in_game_id(ids).ok_or(Error::NoMainlineInGameId {
            song_id: chart.song_id,
            threshold: ALTERNATE_PLATFORM_ID_THRESHOLD,
        }),
    }
}
