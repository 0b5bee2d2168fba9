use todo_core::db::{commit_and_close, open_db, open_db_in_memory};
use todo_core::{ListName, ListRepository, SqliteListRepository, Task};

#[test]
fn open_db_in_memory_starts_a_transaction() {
    let conn = open_db_in_memory().unwrap();
    assert!(!conn.is_autocommit());
}

#[test]
fn committed_lists_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lists.db");
    let groceries = ListName::parse("Groceries").unwrap();

    let conn = open_db(&path).unwrap();
    {
        let repo = SqliteListRepository::new(&conn);
        repo.create_collection(&groceries).unwrap();
        repo.insert(&groceries, &Task::new("Buy milk").unwrap())
            .unwrap();
    }
    commit_and_close(conn).unwrap();

    let conn = open_db(&path).unwrap();
    let repo = SqliteListRepository::new(&conn);
    assert_eq!(repo.list_collections().unwrap(), vec![groceries.clone()]);
    assert_eq!(repo.select_all(&groceries).unwrap().len(), 1);
}

#[test]
fn dropping_without_commit_discards_the_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lists.db");
    let groceries = ListName::parse("Groceries").unwrap();

    let conn = open_db(&path).unwrap();
    SqliteListRepository::new(&conn)
        .create_collection(&groceries)
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteListRepository::new(&conn);
    assert!(!repo.collection_exists(&groceries).unwrap());
    assert!(repo.list_collections().unwrap().is_empty());
}
