//! Domain type tests for task titles, statuses, priorities, and the
//! aggregate.

use crate::task::domain::{
    NewTask, ParseTaskPriorityError, ParseTaskStatusError, Task, TaskDomainError, TaskPriority,
    TaskStatus, TaskTitle,
};
use mockable::DefaultClock;
use rstest::rstest;

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        priority: TaskPriority::default(),
        due_date: None,
    }
}

#[test]
fn title_rejects_empty_input() {
    assert_eq!(TaskTitle::new(""), Err(TaskDomainError::EmptyTitle));
}

#[test]
fn title_rejects_whitespace_only_input() {
    assert_eq!(TaskTitle::new("   \t"), Err(TaskDomainError::EmptyTitle));
}

#[test]
fn title_trims_surrounding_whitespace() {
    let title = TaskTitle::new("  Write report  ").expect("valid title");
    assert_eq!(title.as_str(), "Write report");
}

#[rstest]
#[case("PENDING", TaskStatus::Pending)]
#[case("in_progress", TaskStatus::InProgress)]
#[case(" completed ", TaskStatus::Completed)]
fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[test]
fn status_rejects_values_outside_the_enumeration() {
    assert_eq!(
        TaskStatus::try_from("DONE"),
        Err(ParseTaskStatusError("DONE".to_owned()))
    );
}

#[rstest]
#[case("LOW", TaskPriority::Low)]
#[case("medium", TaskPriority::Medium)]
#[case(" HIGH ", TaskPriority::High)]
fn priority_parses_case_insensitively(#[case] raw: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(raw), Ok(expected));
}

#[test]
fn priority_rejects_values_outside_the_enumeration() {
    assert_eq!(
        TaskPriority::try_from("URGENT"),
        Err(ParseTaskPriorityError("URGENT".to_owned()))
    );
}

#[test]
fn priority_defaults_to_medium() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
}

#[test]
fn create_forces_pending_status_and_assigns_unique_ids() {
    let mut data = new_task("Write report");
    data.priority = TaskPriority::High;
    let first = Task::create(data.clone(), &DefaultClock);
    let second = Task::create(data, &DefaultClock);

    assert_eq!(first.status(), TaskStatus::Pending);
    assert_eq!(first.priority(), TaskPriority::High);
    assert_ne!(first.id(), second.id());
}

#[test]
fn set_status_leaves_other_fields_unchanged() {
    let original = Task::create(new_task("Write report"), &DefaultClock);
    let mut updated = original.clone();
    updated.set_status(TaskStatus::InProgress);

    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.title(), original.title());
    assert_eq!(updated.priority(), original.priority());
    assert_eq!(updated.due_date(), original.due_date());
    assert_eq!(updated.created_at(), original.created_at());
}

#[test]
fn serializes_to_camel_case_wire_format() {
    let mut data = new_task("Write report");
    data.priority = TaskPriority::High;
    data.due_date = Some("2026-09-01".parse().expect("valid date"));
    let task = Task::create(data, &DefaultClock);

    let value = serde_json::to_value(&task).expect("serializable task");
    assert_eq!(value["title"], "Write report");
    assert_eq!(value["status"], "PENDING");
    assert_eq!(value["priority"], "HIGH");
    assert_eq!(value["dueDate"], "2026-09-01");
    assert!(value["createdAt"].is_string());
    assert!(value.get("due_date").is_none());
}
