use crate::tachi::TachiTierListId;
use crate::tierlist::{TierList, TierListData};

/// Group normalized tier lists by play style, keeping their order
pub fn assemble_tier_list_data(
    tier_lists: impl IntoIterator<Item = (TachiTierListId, TierList)>,
) -> TierListData {
    let mut data = TierListData::default();
    for (id, list) in tier_lists {
        data.tier_lists_mut(id.play_style()).push(list);
    }
    data
}
