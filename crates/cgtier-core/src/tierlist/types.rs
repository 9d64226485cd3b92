use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Single play / double play
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayStyle {
    #[default]
    Sp,
    Dp,
}

impl PlayStyle {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Value of the `play_style` form field (`0` = SP, `1` = DP)
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Sp => "0",
            Self::Dp => "1",
        }
    }
}

impl std::fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Song entry inside a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSong {
    /// In-game song ID, the only identifier sent to the web UI
    #[serde(rename = "songID")]
    pub song_id: u32,
    #[serde(rename = "songName")]
    pub song_name: String,
    /// Mainline game versions the chart's tier applies to
    pub versions: Vec<String>,
}

impl TierSong {
    pub fn is_in_version(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }
}

/// Collator for song titles: CLDR root order, punctuation not ignored
pub fn song_name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Tier label, e.g. `A+`
    pub text: String,
    /// Numeric strength used for ordering
    pub value: f64,
    pub songs: Vec<TierSong>,
}

impl Tier {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
            songs: Vec::new(),
        }
    }

    /// Sort songs by title in collation order. Equal titles keep their order.
    pub fn sort_songs_by_name(&mut self) {
        let mut collator = song_name_collator();
        self.songs
            .sort_by(|a, b| collator.collate(&a.song_name, &b.song_name));
    }

    /// Songs whose chart is available in the given game version, in tier order
    pub fn songs_for_version<'a>(&'a self, version: &str) -> Vec<&'a TierSong> {
        self.songs
            .iter()
            .filter(|song| song.is_in_version(version))
            .collect()
    }

    /// Caption shown when choosing a tier: `A+ (11.8) 24 songs`
    pub fn summary(&self, version: &str) -> String {
        format!(
            "{} ({}) {} songs",
            self.text,
            self.value,
            self.songs_for_version(version).len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierList {
    #[serde(rename = "tierListName")]
    pub tier_list_name: String,
    pub tiers: Vec<Tier>,
}

impl TierList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tier_list_name: name.into(),
            tiers: Vec::new(),
        }
    }

    pub fn find_tier(&self, text: &str) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.text == text)
    }
}

/// Complete dataset, loaded once and read-only afterwards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierListData {
    #[serde(default)]
    pub dp: Vec<TierList>,
    #[serde(default)]
    pub sp: Vec<TierList>,
}
