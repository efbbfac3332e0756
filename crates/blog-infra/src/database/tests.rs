use chrono::{SubsecRound, Utc};
use sea_orm::{ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::blog_post;
use crate::database::postgres_base::{query_error, write_error};
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: Uuid, title: &str) -> blog_post::Model {
    blog_post::Model {
        id,
        author_first_name: "Grace".to_owned(),
        author_last_name: "Hopper".to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        created: Utc::now().trunc_subsecs(6).into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(post_id, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.author.full_name(), "Grace Hopper");
}

#[tokio::test]
async fn test_find_post_by_id_absent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            model(Uuid::new_v4(), "First"),
            model(Uuid::new_v4(), "Second"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[tokio::test]
async fn test_create_returns_stored_row() {
    let stored = model(Uuid::new_v4(), "Created");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let draft = NewBlogPost::new(Author::new("Grace", "Hopper"), "Created", "Content");
    let post = repo.create(draft).await.unwrap();

    assert_eq!(post, BlogPost::from(stored));
}

#[tokio::test]
async fn test_update_replaces_supplied_fields() {
    let post_id = Uuid::new_v4();
    let existing = model(post_id, "Before");
    let updated = blog_post::Model {
        title: "After".to_owned(),
        author_first_name: "Alan".to_owned(),
        author_last_name: "Turing".to_owned(),
        ..existing.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing], vec![updated]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo
        .update_by_id(
            post_id,
            BlogPostChanges {
                title: Some("After".to_owned()),
                author: Some(Author::new("Alan", "Turing")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(post.title, "After");
    assert_eq!(post.author.full_name(), "Alan Turing");
    assert_eq!(post.content, "Content");
}

#[tokio::test]
async fn test_update_absent_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo
        .update_by_id(Uuid::new_v4(), BlogPostChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = Uuid::new_v4();

    BaseRepository::<BlogPost, Uuid>::delete(&repo, id)
        .await
        .unwrap();
    let err = BaseRepository::<BlogPost, Uuid>::delete(&repo, id)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_drop_all_returns_deleted_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.drop_all().await.unwrap(), 3);
}

#[tokio::test]
async fn test_insert_many_with_no_drafts_skips_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    assert!(repo.insert_many(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_many_writes_one_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let drafts = vec![
        NewBlogPost::new(Author::new("Grace", "Hopper"), "First", "One"),
        NewBlogPost::new(Author::new("Alan", "Turing"), "Second", "Two"),
    ];
    let posts = repo.insert_many(drafts).await.unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second"]);
    assert_ne!(posts[0].id, posts[1].id);

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_connection_failures_map_to_connection_error() {
    let err = query_error(DbErr::Conn(RuntimeErr::Internal("connection refused".to_owned())));
    assert!(matches!(err, RepoError::Connection(ref m) if m.contains("connection refused")));

    let err = query_error(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
    assert!(matches!(err, RepoError::Connection(_)));
}

#[test]
fn test_write_errors_recognize_unique_violations() {
    let err = write_error(DbErr::Custom(
        "duplicate key value violates unique constraint".to_owned(),
    ));
    assert!(matches!(err, RepoError::Constraint(_)));

    let err = write_error(DbErr::Custom("syntax error".to_owned()));
    assert!(matches!(err, RepoError::Query(_)));
}
