use todo_core::{ListName, Task, TaskStatus, TaskValidationError};

#[test]
fn new_task_starts_undone() {
    let task = Task::new("Buy milk").unwrap();
    assert_eq!(task.name, "Buy milk");
    assert_eq!(task.status, TaskStatus::Undone);
    assert!(!task.is_done());
}

#[test]
fn blank_task_names_are_rejected() {
    assert_eq!(Task::new("  ").unwrap_err(), TaskValidationError::BlankName);
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::BlankName);
}

#[test]
fn status_uses_stored_literals() {
    assert_eq!(TaskStatus::Undone.as_str(), "undone");
    assert_eq!(TaskStatus::Done.as_str(), "done");
    assert_eq!(TaskStatus::parse("done"), Some(TaskStatus::Done));
    assert_eq!(TaskStatus::parse("DONE"), None);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task {
        name: "Bake bread".to_string(),
        status: TaskStatus::Done,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["name"], "Bake bread");
    assert_eq!(json["status"], "done");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn list_name_serializes_as_identifier() {
    let list = ListName::parse("Weekend chores").unwrap();
    assert_eq!(serde_json::to_value(&list).unwrap(), "Weekend_chores");
}
