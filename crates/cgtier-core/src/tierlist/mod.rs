//! Tier list dataset: the distributable `{ "dp": [...], "sp": [...] }` shape.
//!
//! - `types` - data model (`TierListData`, `TierList`, `Tier`, `TierSong`, `PlayStyle`)
//! - `data` - loading, serialization and lookups used at run time

mod data;
mod types;

pub use types::*;
