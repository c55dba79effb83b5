//! Author use cases: registration, login, and profile management.

use std::sync::Arc;

use scribe_shared::dto::{
    AuthorListResponse, AuthorResponse, LoginRequest, LoginResponse, RegisterRequest,
    UpdateAuthorRequest,
};

use crate::domain::{Author, NewAuthor, Window};
use crate::error::{DomainError, RepoError};
use crate::ports::{AuthError, AuthorRepository, BaseRepository, PasswordService, TokenService};
use crate::update;
use crate::validation::author as rules;

const ENTITY: &str = "author";

/// Role granted to every token issued at login.
pub const AUTHOR_ROLE: &str = "author";

/// Validates author requests and drives the author repository together with
/// the password and token services.
#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthorService {
    pub fn new(
        repo: Arc<dyn AuthorRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repo,
            passwords,
            tokens,
        }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<AuthorResponse, DomainError> {
        let req = RegisterRequest {
            username: req.username.trim().to_lowercase(),
            email: req.email.trim().to_lowercase(),
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            ..req
        };
        rules::validate_register(&req)?;

        let password_hash = self.passwords.hash(&req.password).map_err(internal)?;

        let author = self
            .repo
            .insert(NewAuthor {
                username: req.username,
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                bio: req.bio,
                avatar_url: req.avatar_url,
                is_active: true,
                is_verified: false,
            })
            .await?;

        tracing::info!(author_id = author.id, username = %author.username, "Author registered");
        Ok(author.into())
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, DomainError> {
        rules::validate_login(&req)?;

        let identifier = req.username.trim().to_lowercase();
        let found = if identifier.contains('@') {
            self.repo.find_by_email(&identifier).await?
        } else {
            self.repo.find_by_username(&identifier).await?
        };

        let author = found.ok_or(DomainError::InvalidCredentials)?;
        if !author.is_active {
            tracing::warn!(author_id = author.id, "Login attempt on inactive account");
            return Err(DomainError::AccountInactive);
        }

        let valid = self
            .passwords
            .verify(&req.password, &author.password_hash)
            .map_err(internal)?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .generate_token(author.id, &author.username, vec![AUTHOR_ROLE.to_string()])
            .map_err(internal)?;

        tracing::info!(author_id = author.id, "Author logged in");
        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.expiration_seconds().max(0) as u64,
            author: author.into(),
        })
    }

    pub async fn profile(&self, id: i64) -> Result<AuthorResponse, DomainError> {
        self.find(id).await.map(Into::into)
    }

    pub async fn update_profile(
        &self,
        id: i64,
        req: UpdateAuthorRequest,
    ) -> Result<AuthorResponse, DomainError> {
        let req = UpdateAuthorRequest {
            email: req.email.map(|e| e.trim().to_lowercase()),
            first_name: req.first_name.map(|n| n.trim().to_string()),
            last_name: req.last_name.map(|n| n.trim().to_string()),
            ..req
        };
        rules::validate_update(&req)?;
        let plan = update::author::compose(id, &req)?;

        tracing::debug!(author_id = id, fields = plan.user_field_count(), "Updating author");

        let author = self.repo.update(plan).await?.ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

        tracing::info!(author_id = author.id, "Author profile updated");
        Ok(author.into())
    }

    pub async fn list(&self, window: Window) -> Result<AuthorListResponse, DomainError> {
        let authors = self.repo.list_active(window.limit, window.offset).await?;

        Ok(AuthorListResponse {
            authors: authors.into_iter().map(Into::into).collect(),
            limit: window.limit,
            offset: window.offset,
        })
    }

    pub async fn delete_account(&self, id: i64) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(author_id = id, "Author account deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, id: i64) -> Result<Author, DomainError> {
        self.repo.find_by_id(id).await?.ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })
    }
}

fn internal(err: AuthError) -> DomainError {
    DomainError::Internal(err.to_string())
}
