/// Slot range and sizing for one overwrite run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackOptions {
    /// Songs skipped from the start of the list
    pub start_offset: usize,
    /// Zero-based index of the first destination slot
    pub first_playlist_index: usize,
    /// Total playlist slots on the page
    pub available_slots: usize,
    /// Maximum songs per playlist
    pub capacity: usize,
}

/// Songs destined for one playlist slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistChunk {
    pub slot: usize,
    pub name: String,
    pub song_ids: Vec<u32>,
}

/// Spell out `+` and `-` for playlist names (`A+` -> `Aplus`).
///
/// Only the first occurrence of each sign is replaced.
pub fn format_tier_name(tier: &str) -> String {
    tier.replacen('+', "plus", 1).replacen('-', "minus", 1)
}

/// Name for the `number`-th (1-based) playlist of a tier
pub fn playlist_name(tier_list_name: &str, tier: &str, number: usize) -> String {
    format!("{} {} {}", tier_list_name, format_tier_name(tier), number)
}

/// Split `song_ids` into consecutive playlists.
///
/// Chunk `i` holds songs `[i * capacity + offset, (i + 1) * capacity + offset)`
/// and goes to slot `first_playlist_index + i`. Packing stops when the songs
/// run out or the page has no more slots. A zero capacity yields nothing.
pub fn pack_playlists(
    tier_list_name: &str,
    tier: &str,
    song_ids: &[u32],
    options: &PackOptions,
) -> Vec<PlaylistChunk> {
    let capacity = options.capacity;
    if capacity == 0 {
        return Vec::new();
    }

    let remaining = song_ids.len().saturating_sub(options.start_offset);
    let slots = options
        .available_slots
        .saturating_sub(options.first_playlist_index);

    (0..slots)
        .take_while(|i| i.checked_mul(capacity).is_some_and(|n| n < remaining))
        .map(|i| {
            let start = i * capacity + options.start_offset;
            let end = start.saturating_add(capacity).min(song_ids.len());
            PlaylistChunk {
                slot: options.first_playlist_index + i,
                name: playlist_name(tier_list_name, tier, i + 1),
                song_ids: song_ids[start..end].to_vec(),
            }
        })
        .collect()
}
