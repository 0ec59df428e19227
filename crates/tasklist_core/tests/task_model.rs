use std::collections::HashSet;
use tasklist_core::{generate_task_id, is_valid_task_title, Task};

#[test]
fn empty_and_whitespace_titles_are_invalid() {
    assert!(!is_valid_task_title(""));
    assert!(!is_valid_task_title("   "));
    assert!(!is_valid_task_title("\t \n"));
}

#[test]
fn plain_title_is_valid() {
    assert!(is_valid_task_title("Buy milk"));
}

#[test]
fn generated_ids_are_distinct() {
    let first = generate_task_id();
    let second = generate_task_id();
    assert_ne!(first, second);

    let many: HashSet<String> = (0..1_000).map(|_| generate_task_id()).collect();
    assert_eq!(many.len(), 1_000);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new("abc", "Write spec", true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "abc");
    assert_eq!(json["title"], "Write spec");
    assert_eq!(json["isDone"], true);
    assert!(json.get("is_done").is_none());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
