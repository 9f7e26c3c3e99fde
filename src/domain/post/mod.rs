//! Post domain - records served by the posts API

mod entity;
mod pagination;
mod query;
mod repository;

pub use entity::{FieldUpdate, NewPost, Post, PostId, PostPatch};
pub use pagination::{PaginationEnvelope, PaginationMeta};
pub use query::{ListQuery, PostOrder, PostQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use repository::PostRepository;

#[cfg(test)]
pub use repository::MockPostRepository;
