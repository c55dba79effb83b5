//! Data Transfer Objects - request/response types for the API.
//!
//! Create requests use plain strings: a field missing from the JSON body
//! deserializes to an empty string and is reported by validation.
//! Update requests use `Option<String>` for every field: `None` leaves the
//! stored value untouched, `Some("")` is an explicit empty value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub author_id: i64,
    /// Empty means `draft`.
    pub status: String,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub author_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// Query string for `GET /posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Payload returned after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted_id: i64,
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

/// Request to register a new author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,
    pub password: String,
}

/// Partial update of the authenticated author's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAuthorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response containing an author's public information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub author: AuthorResponse,
}

/// One page of authors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorListResponse {
    pub authors: Vec<AuthorResponse>,
    pub limit: u64,
    pub offset: u64,
}

/// Query string for `GET /authors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_missing_fields_default_to_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();

        assert_eq!(req.title, "Hello");
        assert_eq!(req.status, "");
        assert_eq!(req.author_id, 0);
    }

    #[test]
    fn update_author_distinguishes_absent_from_empty() {
        let req: UpdateAuthorRequest = serde_json::from_str(r#"{"bio":""}"#).unwrap();

        assert_eq!(req.bio.as_deref(), Some(""));
        assert!(req.avatar_url.is_none());
        assert!(req.email.is_none());
    }

    #[test]
    fn author_response_never_carries_a_password() {
        let json = serde_json::to_value(AuthorResponse {
            id: 1,
            username: "writer".to_string(),
            email: "writer@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            bio: String::new(),
            avatar_url: String::new(),
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
