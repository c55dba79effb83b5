//! Author directory and the authenticated author's own profile.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Window;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{DeletedResponse, UpdateAuthorRequest, WindowQuery};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/authors?limit=&offset=
pub async fn list_authors(
    state: web::Data<AppState>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let authors = state.authors.list(Window::from_query(&query)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Authors retrieved successfully", authors)))
}

/// GET /api/v1/authors/me
pub async fn profile(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let author = state.authors.profile(identity.author_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Profile retrieved successfully", author)))
}

/// PUT /api/v1/authors/me
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let author = state
        .authors
        .update_profile(identity.author_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Profile updated successfully", author)))
}

/// DELETE /api/v1/authors/me
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.authors.delete_account(identity.author_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Account deleted successfully",
        DeletedResponse {
            deleted_id: identity.author_id,
        },
    )))
}
