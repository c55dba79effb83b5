//! Registration and login.

use actix_web::{HttpResponse, web};

use scribe_shared::ApiResponse;
use scribe_shared::dto::{LoginRequest, RegisterRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let author = state.authors.register(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("Account created successfully", author)))
}

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let login = state.authors.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Login successful", login)))
}
