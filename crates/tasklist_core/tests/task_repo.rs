use std::cell::Cell;
use tasklist_core::db::open_db_in_memory;
use tasklist_core::{
    KeyValueStore, KeyValueTaskRepository, RepoError, SqliteKeyValueStore, StoreError,
    StoreResult, Task, TaskRepository, DEFAULT_TASKS_KEY,
};

/// Store wrapper that can refuse writes, like a full browser quota.
struct QuotaStore<S> {
    inner: S,
    reject_writes: Cell<bool>,
}

impl<S: KeyValueStore> KeyValueStore for QuotaStore<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.reject_writes.get() {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn get_all_on_empty_store_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));

    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn save_appends_new_tasks_in_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));

    repo.save(&Task::new("a", "first", false)).unwrap();
    repo.save(&Task::new("b", "second", false)).unwrap();
    repo.save(&Task::new("c", "third", true)).unwrap();

    assert_eq!(ids(&repo.get_all().unwrap()), vec!["a", "b", "c"]);
}

#[test]
fn save_replaces_existing_task_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));

    repo.save(&Task::new("a", "first", false)).unwrap();
    repo.save(&Task::new("b", "second", false)).unwrap();
    repo.save(&Task::new("a", "first, renamed", true)).unwrap();

    let tasks = repo.get_all().unwrap();
    assert_eq!(ids(&tasks), vec!["a", "b"]);
    assert_eq!(tasks[0], Task::new("a", "first, renamed", true));
}

#[test]
fn repeated_identical_save_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));
    let task = Task::new("a", "same", false);

    repo.save(&task).unwrap();
    let once = repo.get_all().unwrap();
    repo.save(&task).unwrap();

    assert_eq!(repo.get_all().unwrap(), once);
}

#[test]
fn delete_removes_only_matching_task() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));
    repo.save(&Task::new("a", "first", false)).unwrap();
    repo.save(&Task::new("b", "second", false)).unwrap();

    repo.delete("a").unwrap();

    assert_eq!(ids(&repo.get_all().unwrap()), vec!["b"]);
}

#[test]
fn delete_of_missing_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));
    repo.save(&Task::new("a", "first", false)).unwrap();
    let before = repo.get_all().unwrap();

    repo.delete("missing").unwrap();

    assert_eq!(repo.get_all().unwrap(), before);
}

#[test]
fn mixed_operations_reflect_net_effect() {
    let conn = open_db_in_memory().unwrap();
    let repo = KeyValueTaskRepository::new(SqliteKeyValueStore::new(&conn));
    let mut expected: Vec<Task> = Vec::new();

    // Deterministic pseudo-random walk over a small id space.
    let mut seed: u32 = 7;
    for step in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let id = format!("t{}", (seed >> 16) % 6);
        if (seed >> 8) % 3 == 0 {
            repo.delete(&id).unwrap();
            expected.retain(|task| task.id != id);
        } else {
            let task = Task::new(id.clone(), format!("step {step}"), step % 2 == 0);
            repo.save(&task).unwrap();
            match expected.iter_mut().find(|existing| existing.id == id) {
                Some(existing) => *existing = task,
                None => expected.push(task),
            }
        }
    }

    assert_eq!(repo.get_all().unwrap(), expected);
}

#[test]
fn corrupt_blob_is_reported_not_repaired() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    store.set(DEFAULT_TASKS_KEY, "{not json").unwrap();
    let repo = KeyValueTaskRepository::new(&store);

    assert!(matches!(repo.get_all(), Err(RepoError::InvalidData(_))));
    let save_err = repo.save(&Task::new("a", "x", false)).unwrap_err();
    assert!(matches!(save_err, RepoError::InvalidData(_)));
    assert_eq!(
        store.get(DEFAULT_TASKS_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn write_failure_propagates_and_leaves_collection_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let store = QuotaStore {
        inner: SqliteKeyValueStore::new(&conn),
        reject_writes: Cell::new(false),
    };
    let repo = KeyValueTaskRepository::new(&store);
    repo.save(&Task::new("a", "kept", false)).unwrap();

    store.reject_writes.set(true);
    let err = repo.save(&Task::new("b", "lost", false)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Store(StoreError::Unavailable(ref message)) if message == "quota exceeded"
    ));
    assert!(repo.delete("a").is_err());

    assert_eq!(repo.get_all().unwrap(), vec![Task::new("a", "kept", false)]);
}
