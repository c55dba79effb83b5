//! Error handling - maps every failure onto the JSON error envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use scribe_core::error::{DomainError, ValidationError};
use scribe_core::ports::AuthError;
use scribe_shared::ErrorResponse;

use crate::observability::current_request_id;

/// Application-level error type returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("no fields to update")]
    NothingToUpdate,

    /// Unparseable path or query input.
    #[error("{0}")]
    BadRequest(String),

    /// Unparseable request body.
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::NothingToUpdate
            | AppError::BadRequest(_)
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials(_) | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let reason = self.to_string();
        let error = match self {
            AppError::Validation(_) => ErrorResponse::validation(reason),
            AppError::NothingToUpdate => ErrorResponse::new("Nothing to update").with_error(reason),
            AppError::BadRequest(_) => ErrorResponse::bad_request(reason),
            AppError::InvalidBody(_) => {
                ErrorResponse::new("Invalid request format").with_error(reason)
            }
            AppError::NotFound(_) => ErrorResponse::not_found(reason),
            AppError::Conflict(_) => {
                ErrorResponse::new("Resource already exists").with_error(reason)
            }
            AppError::InvalidCredentials(_) => {
                ErrorResponse::new("Invalid credentials or inactive account").with_error(reason)
            }
            AppError::Unauthorized(_) => ErrorResponse::unauthorized(reason),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                ErrorResponse::internal_error()
            }
        };

        let error = match current_request_id() {
            Some(id) => error.with_request_id(id),
            None => error,
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(v) => AppError::Validation(v),
            DomainError::NoFieldsToUpdate => AppError::NothingToUpdate,
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{entity_type} with id {id} not found"))
            }
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            e @ (DomainError::InvalidCredentials | DomainError::AccountInactive) => {
                AppError::InvalidCredentials(e.to_string())
            }
            DomainError::Unauthorized => AppError::Unauthorized("Unauthorized access".to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

/// Body extraction failures become `Invalid request format`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::InvalidBody(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> serde_json::Value {
        let res = err.error_response();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::from(DomainError::Validation(ValidationError::TitleRequired)), 400),
            (AppError::from(DomainError::NoFieldsToUpdate), 400),
            (AppError::from(DomainError::NotFound { entity_type: "post", id: 1 }), 404),
            (AppError::from(DomainError::Duplicate("slug already exists".into())), 409),
            (AppError::from(DomainError::InvalidCredentials), 401),
            (AppError::from(DomainError::AccountInactive), 401),
            (AppError::from(AuthError::MissingAuth), 401),
            (AppError::from(DomainError::Internal("db down".into())), 500),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{err:?}");
        }
    }

    #[actix_web::test]
    async fn validation_body_names_the_rule() {
        let json = body_json(AppError::Validation(ValidationError::SlugRequired)).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["error"], "slug is required");
    }

    #[actix_web::test]
    async fn internal_details_are_not_leaked() {
        let json = body_json(AppError::Internal("connection refused".into())).await;

        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("error").is_none());
    }

    #[actix_web::test]
    async fn empty_update_body() {
        let json = body_json(AppError::NothingToUpdate).await;

        assert_eq!(json["message"], "Nothing to update");
        assert_eq!(json["error"], "no fields to update");
    }
}
