//! Tachi export records (charts and songs) consumed by the converter.
//!
//! Only the fields the conversion reads are modelled; everything else in the
//! export is ignored during deserialization.

mod types;

pub use types::*;
