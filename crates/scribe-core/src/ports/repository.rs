use async_trait::async_trait;

use crate::domain::{Author, NewAuthor, NewPost, Post};
use crate::error::RepoError;
use crate::update::{AuthorColumn, PostColumn, UpdatePlan};

/// Operations every table-backed repository offers.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post persistence.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Newest first.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Apply a composed update; `None` when the row does not exist.
    async fn update(&self, plan: UpdatePlan<PostColumn>) -> Result<Option<Post>, RepoError>;
}

/// Author persistence.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i64> {
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError>;

    /// Active authors only, newest first.
    async fn list_active(&self, limit: u64, offset: u64) -> Result<Vec<Author>, RepoError>;

    /// Apply a composed update; `None` when the row does not exist.
    async fn update(&self, plan: UpdatePlan<AuthorColumn>) -> Result<Option<Author>, RepoError>;
}
