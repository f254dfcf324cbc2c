//! Partial update payload.
//!
//! A patch is reduced to an ordered list of `(PatchField, PatchValue)`
//! assignments. `PatchField` is a closed set, so the column names that end
//! up in SQL come from this enum and never from client input.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::idea::require_text;

/// A column that a partial update is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    Completed,
    Title,
    Content,
    Category,
}

impl PatchField {
    /// The column name backing this field.
    pub fn column(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Title => "title",
            Self::Content => "content",
            Self::Category => "category",
        }
    }
}

/// The new value for a single patched field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Bool(bool),
    Text(String),
}

/// Fields of an idea to update; `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl IdeaPatch {
    /// Sets the completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.completed.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
    }

    /// Rejects a patch that would blank out the title or content.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(())
    }

    /// Present fields in fixed order: completed, title, content, category.
    pub fn assignments(&self) -> Vec<(PatchField, PatchValue)> {
        let mut out = Vec::with_capacity(4);
        if let Some(completed) = self.completed {
            out.push((PatchField::Completed, PatchValue::Bool(completed)));
        }
        if let Some(ref title) = self.title {
            out.push((PatchField::Title, PatchValue::Text(title.clone())));
        }
        if let Some(ref content) = self.content {
            out.push((PatchField::Content, PatchValue::Text(content.clone())));
        }
        if let Some(ref category) = self.category {
            out.push((PatchField::Category, PatchValue::Text(category.clone())));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(IdeaPatch::default().is_empty());
        assert!(IdeaPatch::default().assignments().is_empty());
    }

    #[test]
    fn assignments_follow_fixed_order() {
        let patch = IdeaPatch::default()
            .category("meta")
            .title("new")
            .completed(true);
        let fields: Vec<_> = patch.assignments().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![PatchField::Completed, PatchField::Title, PatchField::Category]
        );
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let patch: IdeaPatch =
            serde_json::from_str(r#"{"date":"2024-01-01","id":3}"#).expect("parse");
        assert!(patch.is_empty());
    }

    #[test]
    fn blank_title_rejected() {
        assert!(IdeaPatch::default().title("").validate().is_err());
        assert!(IdeaPatch::default().completed(false).validate().is_ok());
    }

    #[test]
    fn columns_are_allow_listed() {
        assert_eq!(PatchField::Completed.column(), "completed");
        assert_eq!(PatchField::Category.column(), "category");
    }
}
