//! Concurrency tests for the shared in-memory store.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::collections::HashSet;
use std::sync::Arc;

use rstest::rstest;
use taskdesk::{app::in_memory_service, task::adapters::memory::TaskStore};

#[rstest]
#[case(1)]
#[case(16)]
#[case(200)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_listed(#[case] count: usize) {
    let service = Arc::new(in_memory_service(Arc::new(TaskStore::new())));

    let handles: Vec<_> = (0..count)
        .map(|n| {
            let svc = Arc::clone(&service);
            tokio::spawn(async move { svc.create(&format!("task {n}")).await })
        })
        .collect();
    let mut ids = HashSet::new();
    for handle in handles {
        let task = handle
            .await
            .expect("task joins")
            .expect("create succeeds");
        ids.insert(task.id().clone());
    }

    let listed = service.list().await.expect("list succeeds");
    assert_eq!(listed.len(), count);
    assert_eq!(ids.len(), count);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_leave_one_complete_value() {
    const WRITERS: usize = 32;
    let service = Arc::new(in_memory_service(Arc::new(TaskStore::new())));
    let created = service.create("contended").await.expect("create succeeds");

    let handles: Vec<_> = (0..WRITERS)
        .map(|n| {
            let svc = Arc::clone(&service);
            let id = created.id().clone();
            tokio::spawn(async move {
                svc.update(id.as_str(), &format!("writer {n}"), "DONE")
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle
            .await
            .expect("task joins")
            .expect("update succeeds");
    }

    let stored = service
        .get(created.id().as_str())
        .await
        .expect("get succeeds");
    assert!(stored.title().as_str().starts_with("writer "));
    assert_eq!(stored.created_at(), created.created_at());
    assert!(stored.updated_at() > created.updated_at());
}
