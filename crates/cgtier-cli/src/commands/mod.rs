//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod build;
pub mod convert;
pub mod delete;
pub mod fetch;
pub mod list;
pub mod overwrite;
