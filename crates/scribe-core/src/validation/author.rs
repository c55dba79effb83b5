//! Author request validation.

use scribe_shared::dto::{LoginRequest, RegisterRequest, UpdateAuthorRequest};

use super::rules::{
    char_len, is_valid_email, is_valid_url, is_valid_username, len_between, non_empty,
};
use crate::error::{ValidationError, ValidationResult};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 8;
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const BIO_MAX: usize = 500;

/// Validate a registration, reporting the first violated rule.
pub fn validate_register(req: &RegisterRequest) -> ValidationResult {
    if req.username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if !len_between(&req.username, USERNAME_MIN, USERNAME_MAX) {
        return Err(ValidationError::UsernameLength);
    }
    if !is_valid_username(&req.username) {
        return Err(ValidationError::UsernameCharset);
    }

    if req.email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    check_email(&req.email)?;

    if req.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if char_len(&req.password) < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }

    if req.first_name.is_empty() {
        return Err(ValidationError::FirstNameRequired);
    }
    check_first_name(&req.first_name)?;

    if req.last_name.is_empty() {
        return Err(ValidationError::LastNameRequired);
    }
    check_last_name(&req.last_name)?;

    if !req.bio.is_empty() {
        check_bio(&req.bio)?;
    }
    if !req.avatar_url.is_empty() {
        check_avatar_url(&req.avatar_url)?;
    }
    Ok(())
}

/// Validate a login. Presence only: credential strength is not re-judged here.
pub fn validate_login(req: &LoginRequest) -> ValidationResult {
    if req.username.is_empty() {
        return Err(ValidationError::LoginIdentifierRequired);
    }
    if req.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Validate a profile update. Empty email and names mean "leave unchanged"
/// and are skipped; an explicitly empty bio or avatar URL is a request to
/// clear it and passes.
pub fn validate_update(req: &UpdateAuthorRequest) -> ValidationResult {
    if let Some(email) = non_empty(req.email.as_deref()) {
        check_email(email)?;
    }
    if let Some(first_name) = non_empty(req.first_name.as_deref()) {
        check_first_name(first_name)?;
    }
    if let Some(last_name) = non_empty(req.last_name.as_deref()) {
        check_last_name(last_name)?;
    }
    if let Some(bio) = &req.bio {
        check_bio(bio)?;
    }
    if let Some(avatar_url) = req.avatar_url.as_deref().filter(|url| !url.is_empty()) {
        check_avatar_url(avatar_url)?;
    }
    Ok(())
}

fn check_email(email: &str) -> ValidationResult {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

fn check_first_name(name: &str) -> ValidationResult {
    if len_between(name, NAME_MIN, NAME_MAX) {
        Ok(())
    } else {
        Err(ValidationError::FirstNameLength)
    }
}

fn check_last_name(name: &str) -> ValidationResult {
    if len_between(name, NAME_MIN, NAME_MAX) {
        Ok(())
    } else {
        Err(ValidationError::LastNameLength)
    }
}

fn check_bio(bio: &str) -> ValidationResult {
    if char_len(bio) <= BIO_MAX {
        Ok(())
    } else {
        Err(ValidationError::BioTooLong)
    }
}

fn check_avatar_url(url: &str) -> ValidationResult {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(ValidationError::AvatarUrlFormat)
    }
}
