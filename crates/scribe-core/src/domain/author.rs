use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scribe_shared::dto::AuthorResponse;

/// Author entity - a registered writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A normalized registration with the password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub is_active: bool,
    pub is_verified: bool,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            username: author.username,
            email: author.email,
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
            avatar_url: author.avatar_url,
            is_active: author.is_active,
            is_verified: author.is_verified,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}
