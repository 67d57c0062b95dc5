// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{FAILING_INSTRUCTOR_ID, FakeBackend, create_test_instructor};
use crate::controllers::CrudService;
use crate::error::ClientError;
use padel_book::{AvailabilityCounts, CrudSlice};
use padel_book_domain::{Instructor, InstructorInput, Player, PlayerInput};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::task::JoinHandle;

fn instructor_input(name: &str) -> InstructorInput {
    InstructorInput {
        club_id: Some(3),
        name: name.to_string(),
        email: format!("{}@club.test", name.to_lowercase()),
        phone: None,
        bio: None,
        hourly_rate: Some(4500),
    }
}

fn seeded() -> (Arc<FakeBackend>, CrudService<Instructor, FakeBackend>) {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    backend.seed(&[
        create_test_instructor(1, "Ana"),
        create_test_instructor(FAILING_INSTRUCTOR_ID, "Bruno"),
        create_test_instructor(3, "Carla"),
    ]);
    let service: CrudService<Instructor, FakeBackend> = CrudService::new(Arc::clone(&backend));
    (backend, service)
}

#[tokio::test]
async fn test_list_replaces_local_items() {
    let (_backend, service) = seeded();

    let items: Vec<Instructor> = service.list().await.unwrap();

    assert_eq!(items.len(), 3);
    let slice: CrudSlice<Instructor> = service.snapshot().await;
    assert_eq!(slice.items(), items.as_slice());
    assert!(!slice.is_loading());
}

#[tokio::test]
async fn test_create_appends_server_record() {
    let (_backend, service) = seeded();
    service.list().await.unwrap();

    let created: Instructor = service.create(&instructor_input("Diego")).await.unwrap();

    assert_eq!(created.id, 100);
    assert!(created.active);
    let slice: CrudSlice<Instructor> = service.snapshot().await;
    assert_eq!(slice.items().len(), 4);
    assert_eq!(slice.get(100), Some(&created));
    assert!(!slice.is_submitting());
}

#[tokio::test]
async fn test_update_replaces_record_in_place() {
    let (_backend, service) = seeded();
    service.list().await.unwrap();

    let updated: Instructor = service.update(3, &instructor_input("Carla M")).await.unwrap();

    let slice: CrudSlice<Instructor> = service.snapshot().await;
    assert_eq!(slice.items().len(), 3);
    assert_eq!(slice.items()[2], updated);
    assert_eq!(updated.name, "Carla M");
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (backend, service) = seeded();
    service.list().await.unwrap();

    service.delete(1).await.unwrap();

    assert!(service.snapshot().await.get(1).is_none());
    assert_eq!(backend.calls().last().map(String::as_str), Some("delete:instructors:1"));
}

#[tokio::test]
async fn test_failed_mutation_leaves_list_unchanged() {
    let (backend, service) = seeded();
    service.list().await.unwrap();
    backend.fail_mutations.store(true, Ordering::SeqCst);

    let result: Result<(), ClientError> = service.delete(1).await;

    assert!(matches!(result, Err(ClientError::Http { status: 409, .. })));
    let slice: CrudSlice<Instructor> = service.snapshot().await;
    assert_eq!(slice.items().len(), 3);
    assert_eq!(slice.error(), Some("Record is in use"));
    assert!(!slice.is_submitting());
}

#[tokio::test]
async fn test_list_can_be_cancelled() {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    backend.hang_list.store(true, Ordering::SeqCst);
    let service: Arc<CrudService<Player, FakeBackend>> =
        Arc::new(CrudService::new(Arc::clone(&backend)));

    let listing: Arc<CrudService<Player, FakeBackend>> = Arc::clone(&service);
    let handle: JoinHandle<Result<Vec<Player>, ClientError>> =
        tokio::spawn(async move { listing.list().await });
    while !service.snapshot().await.is_loading() {
        tokio::task::yield_now().await;
    }

    service.cancel_list().await;
    let result: Result<Vec<Player>, ClientError> = handle.await.unwrap();

    assert!(matches!(result, Err(ClientError::Cancelled)));
    assert!(!service.snapshot().await.is_loading());
}

#[tokio::test]
async fn test_newer_list_supersedes_older_one() {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    backend.seed(&[create_test_instructor(1, "Ana")]);
    backend.hang_list.store(true, Ordering::SeqCst);
    let service: Arc<CrudService<Instructor, FakeBackend>> =
        Arc::new(CrudService::new(Arc::clone(&backend)));

    let listing: Arc<CrudService<Instructor, FakeBackend>> = Arc::clone(&service);
    let handle: JoinHandle<Result<Vec<Instructor>, ClientError>> =
        tokio::spawn(async move { listing.list().await });
    while backend.calls().is_empty() {
        tokio::task::yield_now().await;
    }
    backend.hang_list.store(false, Ordering::SeqCst);

    let latest: Vec<Instructor> = service.list().await.unwrap();
    let superseded: Result<Vec<Instructor>, ClientError> = handle.await.unwrap();

    assert!(matches!(superseded, Err(ClientError::Cancelled)));
    let slice: CrudSlice<Instructor> = service.snapshot().await;
    assert_eq!(slice.items(), latest.as_slice());
    assert!(!slice.is_loading());
    assert!(slice.error().is_none());
}

#[tokio::test]
async fn test_superseded_list_keeps_loading_for_newer_one() {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    backend.hang_list.store(true, Ordering::SeqCst);
    let service: Arc<CrudService<Player, FakeBackend>> =
        Arc::new(CrudService::new(Arc::clone(&backend)));

    let first_listing: Arc<CrudService<Player, FakeBackend>> = Arc::clone(&service);
    let first: JoinHandle<Result<Vec<Player>, ClientError>> =
        tokio::spawn(async move { first_listing.list().await });
    while backend.calls().is_empty() {
        tokio::task::yield_now().await;
    }
    let second_listing: Arc<CrudService<Player, FakeBackend>> = Arc::clone(&service);
    let second: JoinHandle<Result<Vec<Player>, ClientError>> =
        tokio::spawn(async move { second_listing.list().await });

    let result: Result<Vec<Player>, ClientError> = first.await.unwrap();
    assert!(matches!(result, Err(ClientError::Cancelled)));
    while backend.calls().len() < 2 {
        tokio::task::yield_now().await;
    }
    assert!(service.snapshot().await.is_loading());

    service.cancel_list().await;
    let result: Result<Vec<Player>, ClientError> = second.await.unwrap();
    assert!(matches!(result, Err(ClientError::Cancelled)));
    assert!(!service.snapshot().await.is_loading());
}

#[tokio::test]
async fn test_created_player_uses_server_id() {
    let backend: Arc<FakeBackend> = Arc::new(FakeBackend::new());
    let service: CrudService<Player, FakeBackend> = CrudService::new(backend);

    let player: Player = service
        .create(&PlayerInput {
            name: Some(String::from("Alex")),
            email: String::from("alex@club.test"),
            phone: None,
            level: Some(String::from("3.5")),
        })
        .await
        .unwrap();

    assert_eq!(service.snapshot().await.items(), &[player]);
}

#[tokio::test]
async fn test_availability_counts_tolerate_partial_failure() {
    let (backend, service) = seeded();
    service.list().await.unwrap();

    let counts: AvailabilityCounts = service.availability_counts().await;

    assert_eq!(counts.get(1), 10);
    assert_eq!(counts.get(FAILING_INSTRUCTOR_ID), 0);
    assert_eq!(counts.get(3), 30);
    assert_eq!(service.counts().await, counts);
    let requested: usize = backend
        .calls()
        .iter()
        .filter(|c| c.starts_with("availability_count:"))
        .count();
    assert_eq!(requested, 3);
}
