//! Tachi export to tier list dataset conversion.
//!
//! Pipeline: resolve each chart's song and in-game ID, drop non-mainline
//! versions, collect charts into deduplicated tiers, then group the sorted
//! tier lists by play style.

mod assembler;
mod normalizer;
mod resolver;
mod versions;

pub use assembler::*;
pub use normalizer::*;
pub use resolver::*;
pub use versions::*;

use tracing::info;

use crate::error::Result;
use crate::tachi::{TachiChart, TachiSong, TachiTierListId};
use crate::tierlist::TierListData;

/// Convert Tachi charts and songs into the distributable dataset
pub fn convert_charts(charts: &[TachiChart], songs: Vec<TachiSong>) -> Result<TierListData> {
    let index = SongIndex::new(songs);
    info!(
        "Indexed {} songs, converting {} charts",
        index.len(),
        charts.len()
    );

    let tier_lists = normalize_tier_lists(charts, &index, &TachiTierListId::ALL)?;
    let data = assemble_tier_list_data(tier_lists);

    info!(
        "Built {} SP and {} DP tier lists",
        data.sp.len(),
        data.dp.len()
    );
    Ok(data)
}
