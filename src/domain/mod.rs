//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod post;

pub use cache::{Cache, CacheExt, CacheKeyRegistry, PostCacheKey};
pub use error::DomainError;
pub use post::{
    FieldUpdate, ListQuery, NewPost, PaginationEnvelope, PaginationMeta, Post, PostId, PostPatch,
    PostQuery, PostRepository,
};
