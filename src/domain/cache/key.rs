//! Canonical cache key formatting.
//!
//! Every read and invalidation site derives keys through [`PostCacheKey`], so
//! the key a read populates is always the key a write deletes.

use std::fmt;

use crate::domain::post::{ListQuery, PostId};

/// Title rendered in list keys when no filter is applied
const UNFILTERED_TITLE: &str = "all";

/// Cache key for one of the two memoized post reads
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostCacheKey<'a> {
    /// A page of the listing query
    List(&'a ListQuery),
    /// A single post lookup
    Item(PostId),
}

impl<'a> PostCacheKey<'a> {
    pub fn list(query: &'a ListQuery) -> Self {
        Self::List(query)
    }

    pub fn item(id: PostId) -> Self {
        Self::Item(id)
    }

    /// Label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Item(_) => "item",
        }
    }
}

impl fmt::Display for PostCacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(query) => {
                write!(f, "list page={} limit={} title=", query.page(), query.limit())?;
                write_title(f, query.title())
            }
            Self::Item(id) => write!(f, "item_{}", id),
        }
    }
}

// A literal "all" filter (or one starting with a quote) is written quoted so it
// cannot collide with the unfiltered key.
fn write_title(f: &mut fmt::Formatter<'_>, title: Option<&str>) -> fmt::Result {
    match title {
        None => f.write_str(UNFILTERED_TITLE),
        Some(t) if t == UNFILTERED_TITLE || t.starts_with('"') => write!(f, "{:?}", t),
        Some(t) => f.write_str(t),
    }
}

impl From<PostCacheKey<'_>> for String {
    fn from(key: PostCacheKey<'_>) -> Self {
        key.to_string()
    }
}
