use std::collections::HashMap;

use tracing::debug;

use crate::convert::resolver::{SongIndex, resolve_in_game_id};
use crate::convert::versions::filter_game_versions;
use crate::error::Result;
use crate::tachi::{TachiChart, TachiTier, TachiTierListId};
use crate::tierlist::{Tier, TierList, TierSong};

/// Working set for one tier list while charts are being collected.
///
/// Tiers are unique by label; the value of the first chart seen with a label
/// is the value of that tier.
#[derive(Debug, Default)]
pub struct TierListBuilder {
    tiers: Vec<Tier>,
    by_label: HashMap<String, usize>,
}

impl TierListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tier: &TachiTier, song: TierSong) {
        let index = match self.by_label.get(&tier.text) {
            Some(&index) => index,
            None => {
                let index = self.tiers.len();
                self.tiers.push(Tier::new(tier.text.clone(), tier.value));
                self.by_label.insert(tier.text.clone(), index);
                index
            }
        };
        self.tiers[index].songs.push(song);
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Sort songs by name and tiers by value. Both sorts are stable.
    pub fn finish(self, name: impl Into<String>) -> TierList {
        let mut tiers = self.tiers;
        for tier in &mut tiers {
            tier.sort_songs_by_name();
        }
        tiers.sort_by(|a, b| a.value.total_cmp(&b.value));

        TierList {
            tier_list_name: name.into(),
            tiers,
        }
    }
}

/// Build one sorted tier list per requested annotation, in request order.
///
/// A chart whose song is missing from `index` fails the whole run. Charts
/// without the annotation, or without any mainline version, are skipped for
/// that tier list.
pub fn normalize_tier_lists(
    charts: &[TachiChart],
    index: &SongIndex,
    ids: &[TachiTierListId],
) -> Result<Vec<(TachiTierListId, TierList)>> {
    let mut builders: Vec<TierListBuilder> = ids.iter().map(|_| TierListBuilder::new()).collect();

    for chart in charts {
        let song = index.resolve(chart)?;
        let versions = filter_game_versions(&chart.versions);
        if versions.is_empty() {
            debug!("Skipping song {} (no mainline version)", chart.song_id);
            continue;
        }

        let mut in_game_id = None;
        for (id, builder) in ids.iter().zip(builders.iter_mut()) {
            let Some(tier) = id.tier(&chart.data) else {
                continue;
            };

            let song_id = match in_game_id {
                Some(song_id) => song_id,
                None => *in_game_id.insert(resolve_in_game_id(chart)?),
            };

            builder.push(
                tier,
                TierSong {
                    song_id,
                    song_name: song.title.clone(),
                    versions: versions.clone(),
                },
            );
        }
    }

    Ok(ids
        .iter()
        .zip(builders)
        .map(|(id, builder)| {
            debug!("{}: {} tiers", id, builder.tier_count());
            (*id, builder.finish(id.tier_list_name()))
        })
        .collect())
}
