//! # ideabox-registry
//!
//! Port definitions (abstract traits) for idea storage.
//! Adapter crates implement these traits.

pub mod repository;

pub use repository::{IdeaRepository, RepositoryError};
