//! Idea identity and record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::timestamp;

/// Category assigned when the client does not supply one.
pub const DEFAULT_CATEGORY: &str = "ideia";

/// Store-assigned identifier of an idea.
///
/// Ids come from an `AUTOINCREMENT` column: they grow with every insert and
/// are never reused, even after the row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(i64);

impl IdeaId {
    /// Wraps a raw row id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for IdeaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_input(format!("invalid idea id: {s}")))
    }
}

/// A persisted idea, exactly as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Free-form timestamp string; ordering and "today" matching are
    /// lexicographic on this text.
    pub date: String,
    pub completed: bool,
}

/// A fully defaulted idea ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdea {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
    pub completed: bool,
}

impl NewIdea {
    /// Creates an idea with the default category, the current local time
    /// and `completed = false`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: DEFAULT_CATEGORY.to_string(),
            date: timestamp::now_iso(),
            completed: false,
        }
    }

    /// Overrides the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Overrides the timestamp. The value is stored verbatim.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Overrides the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Checks that title and content are non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

/// Payload of a full update.
///
/// Only title, content and category are overwritten; `date` and
/// `completed` are left as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaReplace {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl IdeaReplace {
    /// Creates a replacement; a missing category falls back to
    /// [`DEFAULT_CATEGORY`].
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }

    /// Checks that title and content are non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}
