//! # cgtier-core
//!
//! Core library for the CG IIDX tier list playlist tools.
//!
//! This crate provides:
//! - Tachi export models and conversion into the tier list dataset
//! - Tier list dataset loading and lookups
//! - Playlist packing for the web UI's fixed playlist slots
//! - Sequential, throttled playlist save/delete runs
//! - Userscript template rendering

pub mod config;
pub mod convert;
pub mod error;
pub mod network;
pub mod panel;
pub mod playlist;
pub mod storage;
pub mod sync;
pub mod tachi;
pub mod template;
pub mod tierlist;

// Re-export from config module
pub use config::Config;

// Re-export from convert module
pub use convert::{
    SongIndex, TierListBuilder, assemble_tier_list_data, convert_charts, filter_game_versions,
    normalize_tier_lists, resolve_in_game_id, select_in_game_id,
};

// Re-export from error module
pub use error::{Error, Result};

pub use network::{CgPlaylistPage, HttpClient};
pub use panel::TierlistPanel;

// Re-export from playlist module
pub use playlist::{
    PackOptions, PageContext, PlaylistChunk, TierSelection, format_tier_name, pack_playlists,
    playlist_name,
};

// Re-export from sync module
pub use sync::{
    FixedDelay, ItemOutcome, ItemReport, LogSink, NoDelay, PlaylistAction, PlaylistForm,
    PlaylistHost, RequestThrottle, SyncDriver, SyncReport,
};

pub use tachi::{InGameId, TachiChart, TachiSong, TachiTier, TachiTierListId};
pub use template::build_userscript;
pub use tierlist::{PlayStyle, Tier, TierList, TierListData, TierSong};
