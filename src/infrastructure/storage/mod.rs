//! Post storage backends

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageConfig, StorageFactory, StorageType, POSTS_TABLE};
pub use in_memory::InMemoryPostRepository;
pub use postgres::{PostgresConfig, PostgresPostRepository};
