use strum::IntoStaticStr;

use crate::playlist::PlaylistChunk;
use crate::tierlist::PlayStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PlaylistAction {
    Save,
    Delete,
}

impl PlaylistAction {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Form posted to the playlists page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistForm {
    pub play_style: PlayStyle,
    /// Zero-based playlist slot
    pub index: usize,
    pub song_ids: Vec<u32>,
    pub name: String,
    pub action: PlaylistAction,
}

impl PlaylistForm {
    pub fn save(play_style: PlayStyle, chunk: &PlaylistChunk) -> Self {
        Self {
            play_style,
            index: chunk.slot,
            song_ids: chunk.song_ids.clone(),
            name: chunk.name.clone(),
            action: PlaylistAction::Save,
        }
    }

    pub fn delete(play_style: PlayStyle, index: usize) -> Self {
        Self {
            play_style,
            index,
            song_ids: Vec::new(),
            name: String::new(),
            action: PlaylistAction::Delete,
        }
    }

    pub fn internal_ids_csv(&self) -> String {
        self.song_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Form fields in submission order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("play_style", self.play_style.form_value().to_string()),
            ("index", self.index.to_string()),
            ("internal_ids_csv", self.internal_ids_csv()),
            ("name", self.name.clone()),
            ("action", self.action.as_str().to_string()),
        ]
    }
}
