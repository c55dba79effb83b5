use scribe_shared::dto::UpdatePostRequest;

use super::{Column, PlanBuilder, UpdatePlan};
use crate::error::EmptyUpdate;
use crate::validation::rules::non_empty;

/// Patchable columns of the `posts` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostColumn {
    Title,
    Content,
    Slug,
    Status,
}

impl Column for PostColumn {
    fn name(&self) -> &'static str {
        match self {
            PostColumn::Title => "title",
            PostColumn::Content => "content",
            PostColumn::Slug => "slug",
            PostColumn::Status => "status",
        }
    }
}

/// Compose the update of post `id`. Fields go in the order
/// title, content, slug, status; empty values are skipped.
pub fn compose(id: i64, req: &UpdatePostRequest) -> Result<UpdatePlan<PostColumn>, EmptyUpdate> {
    PlanBuilder::new(id)
        .set(PostColumn::Title, non_empty(req.title.as_deref()))
        .set(PostColumn::Content, non_empty(req.content.as_deref()))
        .set(PostColumn::Slug, non_empty(req.slug.as_deref()))
        .set(PostColumn::Status, non_empty(req.status.as_deref()))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::{Mutation, Param};

    #[test]
    fn status_only_update() {
        let req = UpdatePostRequest {
            status: Some("published".to_string()),
            ..Default::default()
        };

        let plan = compose(42, &req).unwrap();

        assert_eq!(plan.user_field_count(), 1);
        assert_eq!(
            plan.mutations(),
            &[
                Mutation::Set {
                    column: PostColumn::Status,
                    value: "published".to_string(),
                    ordinal: 1,
                },
                Mutation::TouchUpdatedAt,
            ]
        );
        assert_eq!(plan.id_ordinal(), 2);
        assert_eq!(
            plan.params(),
            vec![Param::Text("published".to_string()), Param::Id(42)]
        );
    }

    #[test]
    fn empty_update_is_rejected() {
        assert_eq!(compose(1, &UpdatePostRequest::default()), Err(EmptyUpdate));
    }

    #[test]
    fn ordinals_follow_field_order_and_skip_absent_fields() {
        let req = UpdatePostRequest {
            status: Some("archived".to_string()),
            title: Some("New title".to_string()),
            slug: Some("new-title".to_string()),
            content: None,
        };

        let plan = compose(7, &req).unwrap();
        let assignments: Vec<_> = plan.assignments().collect();

        assert_eq!(
            assignments,
            vec![
                (PostColumn::Title, "New title", 1),
                (PostColumn::Slug, "new-title", 2),
                (PostColumn::Status, "archived", 3),
            ]
        );
        assert_eq!(plan.id_ordinal(), 4);
        assert_eq!(plan.params().last(), Some(&Param::Id(7)));
        assert_eq!(plan.mutations().last(), Some(&Mutation::TouchUpdatedAt));
    }

    #[test]
    fn empty_values_leave_columns_unchanged() {
        let req = UpdatePostRequest {
            title: Some(String::new()),
            content: Some(String::new()),
            slug: Some(String::new()),
            status: Some("published".to_string()),
        };

        let plan = compose(11, &req).unwrap();

        assert_eq!(
            plan.assignments().collect::<Vec<_>>(),
            vec![(PostColumn::Status, "published", 1)]
        );
        assert_eq!(plan.id_ordinal(), 2);

        let blank = UpdatePostRequest {
            title: Some(String::new()),
            status: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(compose(11, &blank), Err(EmptyUpdate));
    }

    #[test]
    fn all_fields_present() {
        let req = UpdatePostRequest {
            title: Some("Title".to_string()),
            content: Some("Some fresh content".to_string()),
            slug: Some("title".to_string()),
            status: Some("draft".to_string()),
        };

        let plan = compose(3, &req).unwrap();

        assert_eq!(plan.user_field_count(), 4);
        assert_eq!(plan.id_ordinal(), 5);
        assert_eq!(plan.params().len(), 5);
        assert_eq!(plan.value_of(PostColumn::Content), Some("Some fresh content"));
    }
}
