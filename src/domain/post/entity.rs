//! Post entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier, assigned by storage
pub type PostId = i64;

/// A persisted blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Applies the fields present in `patch`, returning whether anything was set
    pub fn apply(&mut self, patch: PostPatch) -> bool {
        let mut changed = false;
        changed |= patch.title.apply_to(&mut self.title);
        changed |= patch.content.apply_to(&mut self.content);
        changed |= patch.author_name.apply_to(&mut self.author_name);
        changed
    }
}

/// Payload for creating a post; id and timestamps come from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_name: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_name: author_name.into(),
        }
    }
}

/// Presence-tagged field for sparse updates.
///
/// `Keep` leaves the stored value untouched. `Set` always overwrites, including
/// with an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Keep,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Writes the value into `target` if present
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Self::Keep => false,
            Self::Set(value) => {
                *target = value;
                true
            }
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Set(v),
            None => Self::Keep,
        }
    }
}

/// Sparse update for a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: FieldUpdate<String>,
    pub content: FieldUpdate<String>,
    pub author_name: FieldUpdate<String>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = FieldUpdate::Set(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = FieldUpdate::Set(content.into());
        self
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = FieldUpdate::Set(author_name.into());
        self
    }
}
