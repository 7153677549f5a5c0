//! Board service tests covering the task CRUD contract.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskBoardError, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskBoardService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_only_a_title_applies_defaults(service: TestService) {
    let first = service
        .create_task(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");
    let second = service
        .create_task(CreateTaskRequest::new("File expenses"))
        .await
        .expect("creation should succeed");

    assert_eq!(first.status(), TaskStatus::Pending);
    assert_eq!(first.priority(), TaskPriority::Medium);
    assert!(first.description().is_none());
    assert!(first.due_date().is_none());
    assert_ne!(first.id(), second.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_empty_title_fails_and_persists_nothing(service: TestService) {
    let result = service.create_task(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::EmptyTitle))
    ));
    assert!(service.list_tasks().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_unknown_priority_is_rejected(service: TestService) {
    let request = CreateTaskRequest::new("Write report").with_priority("URGENT");
    let result = service.create_task(request).await;

    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::InvalidPriority(_)))
    ));
    assert!(service.list_tasks().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_parses_priority_and_due_date(service: TestService) {
    let request = CreateTaskRequest::new("Write report")
        .with_description("Quarterly numbers")
        .with_priority("HIGH")
        .with_due_date("2026-09-01");
    let task = service
        .create_task(request)
        .await
        .expect("creation should succeed");

    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.description(), Some("Quarterly numbers"));
    assert_eq!(task.due_date(), Some("2026-09-01".parse().expect("date")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_malformed_due_date_is_rejected(service: TestService) {
    let request = CreateTaskRequest::new("Write report").with_due_date("tomorrow");
    let result = service.create_task(request).await;

    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::InvalidDueDate(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_optional_fields_are_treated_as_absent(service: TestService) {
    // HTML forms submit empty strings for untouched inputs.
    let request = CreateTaskRequest::new("Write report")
        .with_description("")
        .with_priority("")
        .with_due_date("");
    let task = service
        .create_task(request)
        .await
        .expect("creation should succeed");

    assert!(task.description().is_none());
    assert_eq!(task.priority(), TaskPriority::Medium);
    assert!(task.due_date().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_on_missing_task_is_not_found(service: TestService) {
    let task = service
        .create_task(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");

    let result = service.update_status(TaskId::new(), "COMPLETED").await;
    assert!(result.err().is_some_and(|error| error.is_not_found()));

    // The store is unchanged.
    let listed = service.list_tasks().await.expect("list");
    assert_eq!(listed, vec![task]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_rejects_values_outside_the_enumeration(service: TestService) {
    let task = service
        .create_task(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");

    let result = service.update_status(task.id(), "DONE").await;
    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::InvalidStatus(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_on_missing_task_is_not_found(service: TestService) {
    let result = service.delete_task(TaskId::new()).await;
    assert!(result.err().is_some_and(|error| error.is_not_found()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_from_listing(service: TestService) {
    let task = service
        .create_task(CreateTaskRequest::new("Write report"))
        .await
        .expect("creation should succeed");

    let deleted = service.delete_task(task.id()).await.expect("delete");
    assert_eq!(deleted, task);
    assert!(service.list_tasks().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_newest_first(service: TestService) {
    for title in ["A", "B", "C"] {
        service
            .create_task(CreateTaskRequest::new(title))
            .await
            .expect("creation should succeed");
    }

    let titles: Vec<String> = service
        .list_tasks()
        .await
        .expect("list")
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_end_to_end(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Write report").with_priority("HIGH"))
        .await
        .expect("creation should succeed");

    let listed = service.list_tasks().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].priority(), TaskPriority::High);
    assert_eq!(listed[0].status(), TaskStatus::Pending);

    let updated = service
        .update_status(created.id(), "IN_PROGRESS")
        .await
        .expect("update should succeed");
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.title(), created.title());
    assert_eq!(updated.priority(), created.priority());
    assert_eq!(updated.created_at(), created.created_at());

    service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");
    assert!(service.list_tasks().await.expect("list").is_empty());
}
