//! Post repository trait

use async_trait::async_trait;

use super::{NewPost, Post, PostId, PostQuery};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Durable, strongly consistent post persistence; the source of truth
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostRepository: Send + Sync + std::fmt::Debug {
    /// Returns one page of posts and the total number of matching posts
    async fn query(&self, query: &PostQuery) -> Result<(Vec<Post>, u64), DomainError>;

    /// Finds a post by ID
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError>;

    /// Persists a new post, assigning its id and timestamps
    async fn insert(&self, post: NewPost) -> Result<Post, DomainError>;

    /// Persists changes to an existing post, refreshing `updated_at`
    async fn save(&self, post: Post) -> Result<Post, DomainError>;

    /// Removes a post, returning the removed value
    async fn remove(&self, post: Post) -> Result<Post, DomainError>;

    /// Verifies the backend is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
