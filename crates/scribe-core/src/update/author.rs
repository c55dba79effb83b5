use scribe_shared::dto::UpdateAuthorRequest;

use super::{Column, PlanBuilder, UpdatePlan};
use crate::error::EmptyUpdate;
use crate::validation::rules::non_empty;

/// Patchable columns of the `authors` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorColumn {
    Email,
    FirstName,
    LastName,
    Bio,
    AvatarUrl,
}

impl Column for AuthorColumn {
    fn name(&self) -> &'static str {
        match self {
            AuthorColumn::Email => "email",
            AuthorColumn::FirstName => "first_name",
            AuthorColumn::LastName => "last_name",
            AuthorColumn::Bio => "bio",
            AuthorColumn::AvatarUrl => "avatar_url",
        }
    }
}

/// Compose the update of author `id`. Empty email and names are skipped.
/// Bio and avatar are copied verbatim, so `Some("")` clears them.
pub fn compose(
    id: i64,
    req: &UpdateAuthorRequest,
) -> Result<UpdatePlan<AuthorColumn>, EmptyUpdate> {
    PlanBuilder::new(id)
        .set(AuthorColumn::Email, non_empty(req.email.as_deref()))
        .set(AuthorColumn::FirstName, non_empty(req.first_name.as_deref()))
        .set(AuthorColumn::LastName, non_empty(req.last_name.as_deref()))
        .set(AuthorColumn::Bio, req.bio.as_deref())
        .set(AuthorColumn::AvatarUrl, req.avatar_url.as_deref())
        .finish()
}
