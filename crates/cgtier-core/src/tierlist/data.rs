use std::path::Path;

use crate::error::{Error, Result};
use crate::storage;
use crate::tierlist::{PlayStyle, Tier, TierList, TierListData};

impl TierListData {
    /// Load a dataset produced by the converter
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        storage::load_json(path)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed form written by the converter
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Single-line form embedded into the userscript
    pub fn to_minified_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn tier_lists(&self, play_style: PlayStyle) -> &[TierList] {
        match play_style {
            PlayStyle::Sp => &self.sp,
            PlayStyle::Dp => &self.dp,
        }
    }

    pub fn tier_lists_mut(&mut self, play_style: PlayStyle) -> &mut Vec<TierList> {
        match play_style {
            PlayStyle::Sp => &mut self.sp,
            PlayStyle::Dp => &mut self.dp,
        }
    }

    pub fn find_tier_list(&self, play_style: PlayStyle, name: &str) -> Option<&TierList> {
        self.tier_lists(play_style)
            .iter()
            .find(|list| list.tier_list_name == name)
    }

    /// Look up a tier list and one of its tiers, reporting which lookup failed
    pub fn find_tier(
        &self,
        play_style: PlayStyle,
        tier_list_name: &str,
        tier_text: &str,
    ) -> Result<(&TierList, &Tier)> {
        let list = self
            .find_tier_list(play_style, tier_list_name)
            .ok_or_else(|| Error::TierListNotFound {
                play_style: play_style.to_string(),
                name: tier_list_name.to_string(),
            })?;
        let tier = list
            .find_tier(tier_text)
            .ok_or_else(|| Error::TierNotFound(tier_text.to_string()))?;
        Ok((list, tier))
    }
}
