//! List query parameters and the storage query they translate to

use crate::domain::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 2;

/// Parameters of a paginated, optionally filtered post listing.
///
/// Defaults are applied at construction so that two queries built from the
/// same effective parameters compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    page: u32,
    limit: u32,
    title: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            title: None,
        }
    }
}

impl ListQuery {
    /// Builds a query from optional request parameters.
    ///
    /// Missing page/limit take their defaults; an empty title filter means
    /// no filter.
    pub fn new(
        page: Option<u32>,
        limit: Option<u32>,
        title: Option<String>,
    ) -> Result<Self, DomainError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(DomainError::validation("page must be a positive integer"));
        }

        if limit == 0 {
            return Err(DomainError::validation("limit must be a positive integer"));
        }

        Ok(Self {
            page,
            limit,
            title: title.filter(|t| !t.is_empty()),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Number of rows skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Translates into the storage-level query
    pub fn to_post_query(&self) -> PostQuery {
        PostQuery {
            order: PostOrder::CreatedAtDesc,
            title_contains: self.title.clone(),
            offset: self.offset(),
            limit: u64::from(self.limit),
        }
    }
}

/// Ordering applied by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    /// Newest first; ties broken by descending id
    #[default]
    CreatedAtDesc,
}

/// Storage-level listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub order: PostOrder,
    /// Case-insensitive substring match on title
    pub title_contains: Option<String>,
    pub offset: u64,
    pub limit: u64,
}
