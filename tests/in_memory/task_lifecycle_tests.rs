//! In-memory integration tests for task lifecycle operations.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskdesk::{
    app::{InMemoryTaskService, in_memory_service},
    task::{adapters::memory::TaskStore, domain::TaskStatus, services::TaskErrorKind},
};

#[fixture]
fn store() -> Arc<TaskStore> {
    Arc::new(TaskStore::new())
}

#[fixture]
fn service(store: Arc<TaskStore>) -> InMemoryTaskService {
    in_memory_service(store)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_round_trip(service: InMemoryTaskService) {
    let created = service.create("buy milk").await.expect("create succeeds");
    assert_eq!(created.status(), TaskStatus::Todo);

    let updated = service
        .update(created.id().as_str(), "buy milk", "DONE")
        .await
        .expect("update succeeds");
    assert_eq!(updated.status(), TaskStatus::Done);
    assert!(updated.updated_at() > updated.created_at());

    let listed = service.list().await.expect("list succeeds");
    assert_eq!(listed, vec![updated.clone()]);

    service
        .delete(updated.id().as_str())
        .await
        .expect("delete succeeds");
    let missing = service
        .get(updated.id().as_str())
        .await
        .expect_err("deleted task is gone");
    assert_eq!(missing.kind(), TaskErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn services_sharing_a_store_share_tasks(store: Arc<TaskStore>) {
    let writer = in_memory_service(Arc::clone(&store));
    let reader = in_memory_service(store);

    let created = writer.create("shared").await.expect("create succeeds");
    let fetched = reader
        .get(created.id().as_str())
        .await
        .expect("reader sees the task");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn generated_ids_are_unique(service: InMemoryTaskService) {
    let first = service.create("same title").await.expect("create succeeds");
    let second = service.create("same title").await.expect("create succeeds");

    assert_ne!(first.id(), second.id());
    assert_eq!(service.list().await.expect("list succeeds").len(), 2);
}
