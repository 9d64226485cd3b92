//! List command: show tier lists and tiers of a dataset.

use std::path::Path;

use anyhow::Result;
use cgtier_core::PlayStyle;

use crate::cli_utils;

pub fn run(tierlist_path: &Path, play_style: PlayStyle, game_version: Option<&str>) -> Result<()> {
    let data = cli_utils::load_tierlist(tierlist_path)?;
    let tier_lists = data.tier_lists(play_style);

    if tier_lists.is_empty() {
        println!("No {} tier lists.", play_style.short_name().to_uppercase());
        return Ok(());
    }

    for list in tier_lists {
        println!("{}", list.tier_list_name);
        for tier in &list.tiers {
            match game_version {
                Some(version) => println!("  {}", tier.summary(version)),
                None => println!(
                    "  {} ({}) {} songs",
                    tier.text,
                    tier.value,
                    tier.songs.len()
                ),
            }
        }
    }

    Ok(())
}
