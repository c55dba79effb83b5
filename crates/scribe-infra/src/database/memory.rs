//! In-memory repositories - used when no database is configured, and in tests.
//!
//! They honour the same contracts as the PostgreSQL repositories: unique
//! columns, newest-first listing, and composed updates that refresh
//! `updated_at`. Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use scribe_core::domain::{Author, NewAuthor, NewPost, Post, PostStatus};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorRepository, BaseRepository, PostRepository};
use scribe_core::update::{AuthorColumn, PostColumn, UpdatePlan};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Newest first, ties broken by id, then windowed.
fn page<T: Clone>(
    rows: impl Iterator<Item = T>,
    created: impl Fn(&T) -> (chrono::DateTime<Utc>, i64),
    limit: u64,
    offset: u64,
) -> Vec<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by_key(|row| std::cmp::Reverse(created(row)));
    rows.into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(limit as usize)
        .collect()
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// In-memory post store.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|p| p.slug == new.slug) {
            return Err(RepoError::Constraint("slug".to_string()));
        }

        let now = Utc::now();
        let post = Post {
            id: table.allocate_id(),
            title: new.title,
            content: new.content,
            slug: new.slug,
            author_id: new.author_id,
            status: new.status,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(page(
            table.rows.values().cloned(),
            |p| (p.created_at, p.id),
            limit,
            offset,
        ))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn update(&self, plan: UpdatePlan<PostColumn>) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;
        let id = plan.id();

        if let Some(slug) = plan.value_of(PostColumn::Slug) {
            if table.rows.values().any(|p| p.slug == slug && p.id != id) {
                return Err(RepoError::Constraint("slug".to_string()));
            }
        }

        let Some(post) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        let mut updated = post.clone();
        for (column, value, _) in plan.assignments() {
            match column {
                PostColumn::Title => updated.title = value.to_string(),
                PostColumn::Content => updated.content = value.to_string(),
                PostColumn::Slug => updated.slug = value.to_string(),
                PostColumn::Status => {
                    updated.status = value.parse::<PostStatus>().map_err(|_| {
                        RepoError::Query(format!("status check violated: {value}"))
                    })?
                }
            }
        }
        updated.updated_at = Utc::now();
        *post = updated.clone();

        Ok(Some(updated))
    }
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

/// In-memory author store.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the active flag. Accounts are never deactivated through the API;
    /// this exists for operators and tests.
    pub async fn set_active(&self, id: i64, active: bool) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let author = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        author.is_active = active;
        author.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<Author, i64> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn insert(&self, new: NewAuthor) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|a| a.username == new.username) {
            return Err(RepoError::Constraint("username".to_string()));
        }
        if table.rows.values().any(|a| a.email == new.email) {
            return Err(RepoError::Constraint("email".to_string()));
        }

        let now = Utc::now();
        let author = Author {
            id: table.allocate_id(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            first_name: new.first_name,
            last_name: new.last_name,
            bio: new.bio,
            avatar_url: new.avatar_url,
            is_active: new.is_active,
            is_verified: new.is_verified,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(author.id, author.clone());
        Ok(author)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.email == email).cloned())
    }

    async fn list_active(&self, limit: u64, offset: u64) -> Result<Vec<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(page(
            table.rows.values().filter(|a| a.is_active).cloned(),
            |a| (a.created_at, a.id),
            limit,
            offset,
        ))
    }

    async fn update(&self, plan: UpdatePlan<AuthorColumn>) -> Result<Option<Author>, RepoError> {
        let mut table = self.table.write().await;
        let id = plan.id();

        if let Some(email) = plan.value_of(AuthorColumn::Email) {
            if table.rows.values().any(|a| a.email == email && a.id != id) {
                return Err(RepoError::Constraint("email".to_string()));
            }
        }

        let Some(author) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        for (column, value, _) in plan.assignments() {
            let field = match column {
                AuthorColumn::Email => &mut author.email,
                AuthorColumn::FirstName => &mut author.first_name,
                AuthorColumn::LastName => &mut author.last_name,
                AuthorColumn::Bio => &mut author.bio,
                AuthorColumn::AvatarUrl => &mut author.avatar_url,
            };
            *field = value.to_string();
        }
        author.updated_at = Utc::now();

        Ok(Some(author.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::update;
    use scribe_shared::dto::{UpdateAuthorRequest, UpdatePostRequest};

    fn new_post(slug: &str) -> NewPost {
        NewPost {
            title: "A title".to_string(),
            content: "Some content for the post".to_string(),
            slug: slug.to_string(),
            author_id: 1,
            status: PostStatus::Draft,
        }
    }

    fn new_author(username: &str, email: &str) -> NewAuthor {
        NewAuthor {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            bio: "Mathematician".to_string(),
            avatar_url: String::new(),
            is_active: true,
            is_verified: false,
        }
    }

    #[tokio::test]
    async fn post_ids_are_assigned_sequentially() {
        let repo = InMemoryPostRepository::new();

        let first = repo.insert(new_post("first")).await.unwrap();
        let second = repo.insert(new_post("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        repo.insert(new_post("same")).await.unwrap();

        let err = repo.insert(new_post("same")).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(ref f) if f == "slug"));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_windowed() {
        let repo = InMemoryPostRepository::new();
        for slug in ["one", "two", "three"] {
            repo.insert(new_post(slug)).await.unwrap();
        }

        let slugs: Vec<_> = repo
            .list(2, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["three", "two"]);

        let rest = repo.list(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].slug, "one");
    }

    #[tokio::test]
    async fn post_update_applies_plan_and_refreshes_timestamp() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(new_post("slug")).await.unwrap();

        let req = UpdatePostRequest {
            status: Some("published".to_string()),
            ..Default::default()
        };
        let plan = update::post::compose(post.id, &req).unwrap();
        let updated = repo.update(plan).await.unwrap().unwrap();

        assert_eq!(updated.status, PostStatus::Published);
        assert_eq!(updated.title, post.title);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn post_update_of_missing_row_is_none() {
        let repo = InMemoryPostRepository::new();
        let req = UpdatePostRequest {
            title: Some("Whatever".to_string()),
            ..Default::default()
        };
        let plan = update::post::compose(99, &req).unwrap();

        assert!(repo.update(plan).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn author_uniqueness() {
        let repo = InMemoryAuthorRepository::new();
        repo.insert(new_author("ada", "ada@example.com")).await.unwrap();

        let err = repo
            .insert(new_author("ada", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(ref f) if f == "username"));

        let err = repo
            .insert(new_author("grace", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(ref f) if f == "email"));
    }

    #[tokio::test]
    async fn author_update_clears_bio_and_keeps_absent_fields() {
        let repo = InMemoryAuthorRepository::new();
        let author = repo.insert(new_author("ada", "ada@example.com")).await.unwrap();

        let req = UpdateAuthorRequest {
            bio: Some(String::new()),
            ..Default::default()
        };
        let plan = update::author::compose(author.id, &req).unwrap();
        let updated = repo.update(plan).await.unwrap().unwrap();

        assert_eq!(updated.bio, "");
        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn list_active_skips_inactive_authors() {
        let repo = InMemoryAuthorRepository::new();
        let ada = repo.insert(new_author("ada", "ada@example.com")).await.unwrap();
        repo.insert(new_author("grace", "grace@example.com")).await.unwrap();
        repo.set_active(ada.id, false).await.unwrap();

        let active = repo.list_active(10, 0).await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].username, "grace");
    }
}
