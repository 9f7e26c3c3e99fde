//! Infrastructure layer - storage, cache and service implementations

pub mod cache;
pub mod logging;
pub mod observability;
pub mod services;
pub mod storage;
