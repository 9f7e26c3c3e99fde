//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::PostService;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
}

impl AppState {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }
}
