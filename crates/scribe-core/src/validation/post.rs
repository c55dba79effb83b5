//! Post request validation.

use scribe_shared::dto::{CreatePostRequest, UpdatePostRequest};

use super::rules::{char_len, len_between, non_empty};
use crate::domain::PostStatus;
use crate::error::{ValidationError, ValidationResult};

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 200;
const CONTENT_MIN: usize = 10;

/// Validate a create request, reporting the first violated rule.
///
/// An empty status stands for `draft` and passes.
pub fn validate_create(req: &CreatePostRequest) -> ValidationResult {
    if req.title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    check_title(&req.title)?;
    if req.content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    check_content(&req.content)?;
    if req.slug.is_empty() {
        return Err(ValidationError::SlugRequired);
    }
    if req.author_id <= 0 {
        return Err(ValidationError::AuthorIdRequired);
    }
    if !req.status.is_empty() {
        check_status(&req.status)?;
    }
    Ok(())
}

/// Validate a partial update. Only non-empty fields are checked; an empty
/// value means "leave unchanged".
pub fn validate_update(req: &UpdatePostRequest) -> ValidationResult {
    if let Some(title) = non_empty(req.title.as_deref()) {
        check_title(title)?;
    }
    if let Some(content) = non_empty(req.content.as_deref()) {
        check_content(content)?;
    }
    if let Some(status) = non_empty(req.status.as_deref()) {
        check_status(status)?;
    }
    Ok(())
}

/// Status a create request resolves to.
pub fn resolve_status(raw: &str) -> Result<PostStatus, ValidationError> {
    if raw.is_empty() {
        return Ok(PostStatus::Draft);
    }
    raw.parse()
        .map_err(|_| ValidationError::InvalidStatus(raw.to_string()))
}

fn check_title(title: &str) -> ValidationResult {
    if len_between(title, TITLE_MIN, TITLE_MAX) {
        Ok(())
    } else {
        Err(ValidationError::TitleLength)
    }
}

fn check_content(content: &str) -> ValidationResult {
    if char_len(content) >= CONTENT_MIN {
        Ok(())
    } else {
        Err(ValidationError::ContentTooShort)
    }
}

fn check_status(status: &str) -> ValidationResult {
    status
        .parse::<PostStatus>()
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidStatus(status.to_string()))
}
