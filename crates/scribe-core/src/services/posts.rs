//! Post use cases.

use std::sync::Arc;

use scribe_shared::dto::{CreatePostRequest, PostListResponse, UpdatePostRequest};

use crate::domain::{NewPost, Pagination, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, PostRepository};
use crate::update;
use crate::validation::post as rules;

const ENTITY: &str = "post";

/// Validates post requests and drives the post repository.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        rules::validate_create(&req)?;
        let status = rules::resolve_status(&req.status)?;

        let post = self
            .repo
            .insert(NewPost {
                title: req.title,
                content: req.content,
                slug: req.slug,
                author_id: req.author_id,
                status,
            })
            .await?;

        tracing::info!(post_id = post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.repo.find_by_id(id).await?.ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })
    }

    pub async fn list(&self, page: Pagination) -> Result<PostListResponse, DomainError> {
        let total_count = self.repo.count().await?;
        let posts = self.repo.list(page.limit(), page.offset()).await?;

        Ok(PostListResponse {
            posts: posts.into_iter().map(Into::into).collect(),
            total_count,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages(total_count),
        })
    }

    pub async fn update(&self, id: i64, req: UpdatePostRequest) -> Result<Post, DomainError> {
        rules::validate_update(&req)?;
        let plan = update::post::compose(id, &req)?;

        tracing::debug!(post_id = id, fields = plan.user_field_count(), "Updating post");

        let post = self.repo.update(plan).await?.ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

        tracing::info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
