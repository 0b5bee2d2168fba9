use todo_core::db::open_db_in_memory;
use todo_core::{ListName, ListRepository, RepoError, SqliteListRepository, Task, TaskStatus};

fn list(raw: &str) -> ListName {
    ListName::parse(raw).unwrap()
}

fn task(name: &str) -> Task {
    Task::new(name).unwrap()
}

#[test]
fn create_collection_rejects_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    repo.create_collection(&list("Groceries")).unwrap();
    let err = repo.create_collection(&list("Groceries")).unwrap_err();
    assert!(matches!(err, RepoError::ListAlreadyExists(name) if name.as_str() == "Groceries"));
    assert!(repo.select_all(&list("Groceries")).unwrap().is_empty());
}

#[test]
fn ensure_collection_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    assert!(repo.ensure_collection(&list("Work")).unwrap());
    assert!(!repo.ensure_collection(&list("Work")).unwrap());
    assert_eq!(repo.list_collections().unwrap(), vec![list("Work")]);
}

#[test]
fn list_collections_follows_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    for name in ["Zoo trip", "Alpha", "Mid"] {
        repo.create_collection(&list(name)).unwrap();
    }

    let names: Vec<String> = repo
        .list_collections()
        .unwrap()
        .iter()
        .map(ListName::display)
        .collect();
    assert_eq!(names, vec!["Zoo trip", "Alpha", "Mid"]);
}

#[test]
fn lookups_ignore_space_versus_underscore() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    repo.create_collection(&list("Weekend chores")).unwrap();
    assert!(repo.collection_exists(&list("Weekend_chores")).unwrap());
    assert!(!repo.collection_exists(&list("weekend chores")).unwrap());
}

#[test]
fn drop_collection_requires_existing_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let err = repo.drop_collection(&list("Missing")).unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(_)));

    repo.create_collection(&list("Old")).unwrap();
    repo.drop_collection(&list("Old")).unwrap();
    assert!(!repo.collection_exists(&list("Old")).unwrap());
}

#[test]
fn task_operations_on_missing_list_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);
    let missing = list("Missing");

    assert!(matches!(
        repo.insert(&missing, &task("x")),
        Err(RepoError::ListNotFound(_))
    ));
    assert!(matches!(
        repo.select_all(&missing),
        Err(RepoError::ListNotFound(_))
    ));
    assert!(matches!(
        repo.update_status_by_prefix(&missing, "x"),
        Err(RepoError::ListNotFound(_))
    ));
    assert!(matches!(
        repo.delete_by_prefix(&missing, "x"),
        Err(RepoError::ListNotFound(_))
    ));
}

#[test]
fn select_all_preserves_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);
    let groceries = list("Groceries");
    repo.create_collection(&groceries).unwrap();

    for name in ["Buy milk", "Apples", "Coffee"] {
        repo.insert(&groceries, &task(name)).unwrap();
    }

    let names: Vec<String> = repo
        .select_all(&groceries)
        .unwrap()
        .into_iter()
        .map(|task| task.name)
        .collect();
    assert_eq!(names, vec!["Buy milk", "Apples", "Coffee"]);
}

#[test]
fn prefix_matching_is_case_sensitive_and_literal() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);
    let groceries = list("Groceries");
    repo.create_collection(&groceries).unwrap();
    for name in ["Buy milk", "buy eggs", "Buy bread", "100% juice"] {
        repo.insert(&groceries, &task(name)).unwrap();
    }

    assert_eq!(repo.update_status_by_prefix(&groceries, "Buy").unwrap(), 2);
    assert_eq!(repo.update_status_by_prefix(&groceries, "%").unwrap(), 0);
    assert_eq!(repo.delete_by_prefix(&groceries, "_uy").unwrap(), 0);

    let tasks = repo.select_all(&groceries).unwrap();
    let done: Vec<&str> = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .map(|task| task.name.as_str())
        .collect();
    assert_eq!(done, vec!["Buy milk", "Buy bread"]);

    assert_eq!(repo.delete_by_prefix(&groceries, "100%").unwrap(), 1);
    assert_eq!(repo.select_all(&groceries).unwrap().len(), 3);
}

#[test]
fn unknown_persisted_status_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);
    let groceries = list("Groceries");
    repo.create_collection(&groceries).unwrap();
    conn.execute(
        "INSERT INTO \"Groceries\" (task, status) VALUES ('Buy milk', 'later');",
        [],
    )
    .unwrap();

    let err = repo.select_all(&groceries).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("later")));
}
