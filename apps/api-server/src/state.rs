//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{AuthorRepository, PostRepository, TokenService};
use scribe_core::services::{AuthorService, PostService};
use scribe_infra::{
    Argon2PasswordService, InMemoryAuthorRepository, InMemoryPostRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use scribe_infra::{PostgresAuthorRepository, PostgresPostRepository, database};

#[cfg(feature = "rate-limit")]
use scribe_core::ports::RateLimiter;
#[cfg(feature = "rate-limit")]
use scribe_infra::InMemoryRateLimiter;

use crate::config::{AppConfig, DEFAULT_SERVICE_NAME};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub authors: AuthorService,
    pub tokens: Arc<dyn TokenService>,
    pub service_name: String,
    /// Whether repositories are backed by a database.
    pub persistent: bool,
    #[cfg(feature = "rate-limit")]
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

type Repositories = (Arc<dyn PostRepository>, Arc<dyn AuthorRepository>, bool);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, authors, persistent) = repositories(config).await;
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let state = Self {
            service_name: config.service_name.clone(),
            ..Self::assemble(posts, authors, tokens, persistent)
        };

        #[cfg(feature = "rate-limit")]
        let state = Self {
            rate_limiter: rate_limiter(config),
            ..state
        };

        tracing::info!(persistent = state.persistent, "Application state initialized");
        state
    }

    /// State over fresh in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self::assemble(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryAuthorRepository::new()),
            tokens,
            false,
        )
    }

    fn assemble(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorRepository>,
        tokens: Arc<dyn TokenService>,
        persistent: bool,
    ) -> Self {
        let passwords = Arc::new(Argon2PasswordService::new());

        Self {
            posts: PostService::new(posts),
            authors: AuthorService::new(authors, passwords, tokens.clone()),
            tokens,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            persistent,
            #[cfg(feature = "rate-limit")]
            rate_limiter: None,
        }
    }
}

#[cfg(feature = "postgres")]
async fn repositories(config: &AppConfig) -> Repositories {
    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory_repositories();
    };

    match database::connect(db_config).await {
        Ok(conn) => (
            Arc::new(PostgresPostRepository::new(conn.clone())),
            Arc::new(PostgresAuthorRepository::new(conn)),
            true,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
            in_memory_repositories()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_config: &AppConfig) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory_repositories()
}

#[cfg(feature = "rate-limit")]
fn rate_limiter(config: &AppConfig) -> Option<Arc<dyn RateLimiter>> {
    match InMemoryRateLimiter::new(config.rate_limit.clone()) {
        Ok(limiter) => Some(Arc::new(limiter)),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid rate limit settings, rate limiting disabled");
            None
        }
    }
}

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryAuthorRepository::new()),
        false,
    )
}
