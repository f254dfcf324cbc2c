//! # ideabox-types
//!
//! Domain types for the ideabox idea tracker.
//! Pure data types; the only dependencies are serde and chrono.

pub mod category;
pub mod error;
pub mod idea;
pub mod patch;
pub mod stats;
pub mod timestamp;

// Re-exports for convenience.
pub use category::category_label;
pub use error::DomainError;
pub use idea::{Idea, IdeaId, IdeaReplace, NewIdea, DEFAULT_CATEGORY};
pub use patch::{IdeaPatch, PatchField, PatchValue};
pub use stats::{DayCount, IdeaStats};
