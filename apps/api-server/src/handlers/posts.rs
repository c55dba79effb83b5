//! Post handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Pagination;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{
    CreatePostRequest, DeletedResponse, PageQuery, PostResponse, UpdatePostRequest,
};

use super::parse_id;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Post created successfully",
        PostResponse::from(post),
    )))
}

/// GET /api/v1/posts?page=&page_size=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = Pagination::from_query(&query);
    let posts = state.posts.list(page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Posts retrieved successfully", posts)))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id("post", &path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post retrieved successfully",
        PostResponse::from(post),
    )))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id("post", &path)?;
    let post = state.posts.update(id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post updated successfully",
        PostResponse::from(post),
    )))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id("post", &path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post deleted successfully",
        DeletedResponse { deleted_id: id },
    )))
}
