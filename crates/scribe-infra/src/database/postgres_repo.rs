//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use scribe_core::domain::{Author, NewAuthor, NewPost, Post};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorRepository, PostRepository};
use scribe_core::update::{AuthorColumn, PostColumn, UpdatePlan};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            content: Set(new.content),
            slug: Set(new.slug),
            author_id: Set(new.author_id),
            status: Set(new.status.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn update(&self, plan: UpdatePlan<PostColumn>) -> Result<Option<Post>, RepoError> {
        Ok(self.apply_plan(&plan).await?.map(Into::into))
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next();
            match first {
                Some(c) if local.chars().count() > 1 => format!("{c}***@{domain}"),
                _ => format!("***@{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, new: NewAuthor) -> Result<Author, RepoError> {
        let now = Utc::now();
        let model = author::ActiveModel {
            id: NotSet,
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            bio: Set(new.bio),
            avatar_url: Set(new.avatar_url),
            is_active: Set(new.is_active),
            is_verified: Set(new.is_verified),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(username, "Finding author by username");

        let result = AuthorEntity::find()
            .filter(author::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_email = %mask_email(email), "Finding author by email");

        let result = AuthorEntity::find()
            .filter(author::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_active(&self, limit: u64, offset: u64) -> Result<Vec<Author>, RepoError> {
        let rows = AuthorEntity::find()
            .filter(author::Column::IsActive.eq(true))
            .order_by_desc(author::Column::CreatedAt)
            .order_by_desc(author::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, plan: UpdatePlan<AuthorColumn>) -> Result<Option<Author>, RepoError> {
        Ok(self.apply_plan(&plan).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn masks_local_part() {
        assert_eq!(mask_email("writer@example.com"), "w***@example.com");
        assert_eq!(mask_email("w@example.com"), "***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
