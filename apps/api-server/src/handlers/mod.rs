//! HTTP handlers and route configuration.

mod auth;
mod authors;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{AppError, json_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth_scope = web::scope("/auth")
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login));

    #[cfg(feature = "rate-limit")]
    let auth_scope = auth_scope.wrap(crate::middleware::rate_limit::RateLimitMiddleware);

    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/posts")
                        .route("", web::post().to(posts::create_post))
                        .route("", web::get().to(posts::list_posts))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                )
                .service(auth_scope)
                .service(
                    web::scope("/authors")
                        .route("", web::get().to(authors::list_authors))
                        .route("/me", web::get().to(authors::profile))
                        .route("/me", web::put().to(authors::update_profile))
                        .route("/me", web::delete().to(authors::delete_account)),
                ),
        );
}

/// Parse a path identifier; it must be a positive integer.
fn parse_id(entity: &str, raw: &str) -> Result<i64, AppError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {entity} ID format: {raw}")))?;

    if id <= 0 {
        return Err(AppError::BadRequest(format!("{entity} ID must be positive")));
    }

    Ok(id)
}
