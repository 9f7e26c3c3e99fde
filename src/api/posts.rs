//! Post endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Query};
use crate::domain::post::{ListQuery, NewPost, PaginationEnvelope, Post, PostId, PostPatch};

/// Query parameters for listing posts
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListPostsQuery {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<u32>,
    #[validate(length(max = 100, message = "title must be at most 100 characters long"))]
    pub title: Option<String>,
}

/// Request to create a post
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    #[validate(length(min = 3, max = 50, message = "title must be 3 to 50 characters long"))]
    pub title: String,
    #[validate(length(
        min = 3,
        max = 1000,
        message = "content must be 3 to 1000 characters long"
    ))]
    pub content: String,
    #[validate(length(min = 3, max = 50, message = "authorName must be 3 to 50 characters long"))]
    pub author_name: String,
}

/// Request to update a post; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePostRequest {
    pub id: PostId,
    #[validate(length(min = 3, max = 50, message = "title must be 3 to 50 characters long"))]
    pub title: Option<String>,
    #[validate(length(
        min = 3,
        max = 1000,
        message = "content must be 3 to 1000 characters long"
    ))]
    pub content: Option<String>,
    #[validate(length(min = 3, max = 50, message = "authorName must be 3 to 50 characters long"))]
    pub author_name: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        NewPost::new(request.title, request.content, request.author_name)
    }
}

impl UpdatePostRequest {
    fn into_patch(self) -> (PostId, PostPatch) {
        let patch = PostPatch {
            title: self.title.into(),
            content: self.content.into(),
            author_name: self.author_name.into(),
        };
        (self.id, patch)
    }
}

/// Create the posts router
pub fn create_posts_router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts).post(create_post).patch(update_post),
        )
        .route("/posts/{id}", get(get_post).delete(delete_post))
}

fn parse_id(raw: &str) -> Result<PostId, ApiError> {
    raw.parse::<PostId>().map_err(|_| {
        ApiError::bad_request(format!("Invalid post ID: {}", raw)).with_param("id")
    })
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsQuery>,
) -> Result<Json<PaginationEnvelope<Post>>, ApiError> {
    params.validate()?;

    let query = ListQuery::new(params.page, params.limit, params.title)?;
    debug!(page = query.page(), limit = query.limit(), title = ?query.title(), "Listing posts");

    let envelope = state.post_service.list(&query).await?;
    Ok(Json(envelope))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&id)?;
    debug!(post_id = id, "Getting post");

    let post = state.post_service.get(id).await?;
    Ok(Json(post))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    request.validate()?;
    debug!(title = %request.title, "Creating post");

    let post = state.post_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /api/posts
pub async fn update_post(
    State(state): State<AppState>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    request.validate()?;

    let (id, patch) = request.into_patch();
    debug!(post_id = id, "Updating post");

    let post = state.post_service.update(id, patch).await?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&id)?;
    debug!(post_id = id, "Deleting post");

    let post = state.post_service.delete(id).await?;
    Ok(Json(post))
}
