//! CLI command definitions.

pub mod list;
pub mod serve;
pub mod show;
pub mod status;
