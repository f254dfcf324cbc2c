//! CRUD integration tests for `SqliteIdeaRepository`.

use ideabox_registry::{IdeaRepository, RepositoryError};
use ideabox_store_sqlite::SqliteIdeaRepository;
use ideabox_types::{timestamp, IdeaId, IdeaPatch, IdeaReplace, NewIdea};

fn sample_idea() -> NewIdea {
    NewIdea::new("Learn Rust", "Work through the ownership chapter")
}

#[tokio::test]
async fn insert_applies_defaults() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo.insert(&sample_idea()).await.expect("insert");

    let found = repo.find_by_id(id).await.expect("find").expect("should exist");
    assert_eq!(found.title, "Learn Rust");
    assert_eq!(found.category, "ideia");
    assert!(!found.completed);
    assert!(found.date.starts_with(&timestamp::today()));
}

#[tokio::test]
async fn ids_strictly_increase() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let mut last = None;
    for _ in 0..5 {
        let id = repo.insert(&sample_idea()).await.expect("insert");
        if let Some(prev) = last {
            assert!(id > prev);
        }
        last = Some(id);
    }
}

#[tokio::test]
async fn ids_not_reused_after_delete() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let first = repo.insert(&sample_idea()).await.expect("insert");
    repo.delete(first).await.expect("delete");
    let second = repo.insert(&sample_idea()).await.expect("insert");
    assert!(second > first);
}

#[tokio::test]
async fn insert_blank_title_rejected() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let err = repo
        .insert(&NewIdea::new("", "content"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Validation { .. }));
    assert!(repo.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn find_nonexistent_returns_none() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let found = repo.find_by_id(IdeaId::new(42)).await.expect("find");
    assert!(found.is_none());
}

#[tokio::test]
async fn replace_overwrites_text_fields_only() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo
        .insert(
            &sample_idea()
                .with_category("meta")
                .with_date("2024-01-01T08:00:00")
                .with_completed(true),
        )
        .await
        .expect("insert");

    repo.replace(id, &IdeaReplace::new("New title", "New content", None))
        .await
        .expect("replace");

    let found = repo.find_by_id(id).await.expect("find").expect("exists");
    assert_eq!(found.title, "New title");
    assert_eq!(found.content, "New content");
    assert_eq!(found.category, "ideia");
    assert_eq!(found.date, "2024-01-01T08:00:00");
    assert!(found.completed);
}

#[tokio::test]
async fn replace_nonexistent_returns_not_found() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let err = repo
        .replace(IdeaId::new(9999), &IdeaReplace::new("t", "c", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert!(repo.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn patch_completed_leaves_text_untouched() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo
        .insert(&sample_idea().with_category("lembrete"))
        .await
        .expect("insert");

    repo.patch(id, &IdeaPatch::default().completed(true))
        .await
        .expect("patch");

    let found = repo.find_by_id(id).await.expect("find").expect("exists");
    assert!(found.completed);
    assert_eq!(found.title, "Learn Rust");
    assert_eq!(found.content, "Work through the ownership chapter");
    assert_eq!(found.category, "lembrete");
}

#[tokio::test]
async fn patch_several_fields() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo.insert(&sample_idea()).await.expect("insert");

    let patch = IdeaPatch::default().title("Renamed").category("meta");
    repo.patch(id, &patch).await.expect("patch");

    let found = repo.find_by_id(id).await.expect("find").expect("exists");
    assert_eq!(found.title, "Renamed");
    assert_eq!(found.category, "meta");
    assert_eq!(found.content, "Work through the ownership chapter");
    assert!(!found.completed);
}

#[tokio::test]
async fn empty_patch_is_validation_error() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo.insert(&sample_idea()).await.expect("insert");
    let err = repo.patch(id, &IdeaPatch::default()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Validation { .. }));
}

#[tokio::test]
async fn patch_nonexistent_returns_not_found() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let err = repo
        .patch(IdeaId::new(7), &IdeaPatch::default().completed(true))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_then_not_found() {
    let repo = SqliteIdeaRepository::open_in_memory().expect("open");
    let id = repo.insert(&sample_idea()).await.expect("insert");

    repo.delete(id).await.expect("delete");
    assert!(repo.list().await.expect("list").is_empty());

    let err = repo.delete(id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().expect("tmp");
    let path = dir.path().join("ideas.db");
    let path = path.to_str().expect("utf8");

    let id = {
        let repo = SqliteIdeaRepository::open(path).expect("open");
        repo.insert(&sample_idea()).await.expect("insert")
    };

    let repo = SqliteIdeaRepository::open(path).expect("reopen");
    let found = repo.find_by_id(id).await.expect("find");
    assert!(found.is_some());
}
