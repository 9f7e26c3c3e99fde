//! In-memory post repository

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::{NewPost, Post, PostId, PostOrder, PostQuery, PostRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct Inner {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// Thread-safe in-memory post repository
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryPostRepository {
    inner: RwLock<Inner>,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a repository pre-populated with posts, keeping their ids
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let posts = posts.into_iter().map(|p| (p.id, p)).collect();

        Self {
            inner: RwLock::new(Inner { posts, next_id }),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, DomainError> {
        self.inner
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, DomainError> {
        self.inner
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

fn title_matches(post: &Post, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => post.title.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn query(&self, query: &PostQuery) -> Result<(Vec<Post>, u64), DomainError> {
        let inner = self.read()?;

        let mut matching: Vec<&Post> = inner
            .posts
            .values()
            .filter(|p| title_matches(p, query.title_contains.as_deref()))
            .collect();

        match query.order {
            PostOrder::CreatedAtDesc => matching.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
        }

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.read()?.posts.get(&id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut inner = self.write()?;
        let now = Utc::now();

        let id = inner.next_id;
        inner.next_id += 1;

        let post = Post {
            id,
            title: post.title,
            content: post.content,
            author_name: post.author_name,
            created_at: now,
            updated_at: now,
        };

        inner.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn save(&self, mut post: Post) -> Result<Post, DomainError> {
        let mut inner = self.write()?;

        let Some(slot) = inner.posts.get_mut(&post.id) else {
            return Err(DomainError::not_found(post.id));
        };

        post.updated_at = Utc::now();
        *slot = post.clone();
        Ok(post)
    }

    async fn remove(&self, post: Post) -> Result<Post, DomainError> {
        self.write()?
            .posts
            .remove(&post.id)
            .ok_or_else(|| DomainError::not_found(post.id))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.read().map(|_| ())
    }
}
