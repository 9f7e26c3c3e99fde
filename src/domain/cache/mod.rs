//! Cache domain - cache store abstraction, canonical keys and the list key registry

mod key;
mod registry;
mod repository;

pub use key::PostCacheKey;
pub use registry::CacheKeyRegistry;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
