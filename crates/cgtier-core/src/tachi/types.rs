use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::tierlist::PlayStyle;

/// Song record from a Tachi songs export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TachiSong {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// Tier annotation attached to a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TachiTier {
    pub text: String,
    pub value: f64,
}

/// `inGameID` is either a single ID or every ID the chart is known under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InGameId {
    Single(u32),
    Multiple(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TachiChartData {
    #[serde(rename = "inGameID")]
    pub in_game_id: InGameId,
    #[serde(rename = "dpTier", default, skip_serializing_if = "Option::is_none")]
    pub dp_tier: Option<TachiTier>,
    #[serde(rename = "ncTier", default, skip_serializing_if = "Option::is_none")]
    pub nc_tier: Option<TachiTier>,
    #[serde(rename = "hcTier", default, skip_serializing_if = "Option::is_none")]
    pub hc_tier: Option<TachiTier>,
    #[serde(rename = "exhcTier", default, skip_serializing_if = "Option::is_none")]
    pub exhc_tier: Option<TachiTier>,
}

/// Chart record from a Tachi charts export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TachiChart {
    pub data: TachiChartData,
    pub playtype: TachiPlaytype,
    #[serde(rename = "songID")]
    pub song_id: u32,
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TachiPlaytype {
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "DP")]
    Dp,
}

/// Tier annotations extracted from Tachi charts, one per produced tier list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum TachiTierListId {
    #[strum(serialize = "dpTier")]
    DpTier,
    #[strum(serialize = "ncTier")]
    NcTier,
    #[strum(serialize = "hcTier")]
    HcTier,
    #[strum(serialize = "exhcTier")]
    ExhcTier,
}

impl TachiTierListId {
    /// Extraction order; also the order tier lists appear in the dataset.
    pub const ALL: [TachiTierListId; 4] = [
        Self::DpTier,
        Self::NcTier,
        Self::HcTier,
        Self::ExhcTier,
    ];

    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Name the tier list is published under
    pub fn tier_list_name(&self) -> &'static str {
        match self {
            Self::DpTier | Self::NcTier => "Normal",
            Self::HcTier => "Hard",
            Self::ExhcTier => "EX Hard",
        }
    }

    pub fn play_style(&self) -> PlayStyle {
        match self {
            Self::DpTier => PlayStyle::Dp,
            Self::NcTier | Self::HcTier | Self::ExhcTier => PlayStyle::Sp,
        }
    }

    /// Annotation for this tier list on the given chart, if any
    pub fn tier<'a>(&self, data: &'a TachiChartData) -> Option<&'a TachiTier> {
        match self {
            Self::DpTier => data.dp_tier.as_ref(),
            Self::NcTier => data.nc_tier.as_ref(),
            Self::HcTier => data.hc_tier.as_ref(),
            Self::ExhcTier => data.exhc_tier.as_ref(),
        }
    }
}

impl std::fmt::Display for TachiTierListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
