//! Playlist planning: page state, user selection and slot packing.

mod context;
mod packer;

pub use context::*;
pub use packer::*;
