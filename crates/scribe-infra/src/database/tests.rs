use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use scribe_core::domain::{Author, Post, PostStatus};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};
use scribe_core::update;
use scribe_shared::dto::{UpdateAuthorRequest, UpdatePostRequest};

use crate::database::entity::{author, post};
use crate::database::postgres_base::update_statement;
use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};

fn post_model(id: i64, status: post::Status) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: "Test Post".to_owned(),
        content: "Content long enough".to_owned(),
        slug: "test-post".to_owned(),
        author_id: 7,
        status,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(1, post::Status::Draft)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.status, PostStatus::Draft);
}

#[tokio::test]
async fn test_find_missing_author_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    let result: Option<Author> = repo.find_by_id(404).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_without_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, i64>::delete(&repo, 9).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_returns_refreshed_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(5, post::Status::Published)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let req = UpdatePostRequest {
        status: Some("published".to_string()),
        ..Default::default()
    };
    let plan = update::post::compose(5, &req).unwrap();

    let post = repo.update(plan).await.unwrap().unwrap();
    assert_eq!(post.status, PostStatus::Published);
}

#[test]
fn status_only_update_statement() {
    let req = UpdatePostRequest {
        status: Some("published".to_string()),
        ..Default::default()
    };
    let plan = update::post::compose(5, &req).unwrap();

    let stmt = update_statement("posts", &plan);

    assert_eq!(
        stmt.sql,
        r#"UPDATE "posts" SET "status" = $1, "updated_at" = NOW() WHERE "id" = $2 RETURNING *"#
    );
    let values = stmt.values.unwrap().0;
    assert_eq!(
        values,
        vec![Value::from("published".to_string()), Value::from(5i64)]
    );
}

#[test]
fn full_author_update_statement_keeps_field_order() {
    let req = UpdateAuthorRequest {
        email: Some("ada@example.com".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        bio: Some(String::new()),
        avatar_url: Some("https://example.com/a.png".to_string()),
    };
    let plan = update::author::compose(3, &req).unwrap();

    let stmt = update_statement("authors", &plan);

    assert_eq!(
        stmt.sql,
        concat!(
            r#"UPDATE "authors" SET "email" = $1, "first_name" = $2, "last_name" = $3, "#,
            r#""bio" = $4, "avatar_url" = $5, "updated_at" = NOW() WHERE "id" = $6 RETURNING *"#
        )
    );
    let values = stmt.values.unwrap().0;
    assert_eq!(values.len(), 6);
    assert_eq!(values[3], Value::from(String::new()));
    assert_eq!(values[5], Value::from(3i64));
}
