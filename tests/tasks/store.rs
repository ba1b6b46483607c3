use taskpad::tasks::{TaskAction, TaskStore};

#[tokio::test]
async fn test_subscribe_marks_current_snapshot_seen() {
    let store = TaskStore::new();
    let rx = store.subscribe();

    assert!(!rx.has_changed().unwrap(), "nothing published since subscribing");
}

#[tokio::test]
async fn test_dispatch_broadcasts_applied_changes() {
    let mut store = TaskStore::new();
    let mut rx = store.subscribe();

    let changed = store.dispatch(TaskAction::SetDraft("Buy milk".to_string()));
    assert!(changed);
    assert!(rx.has_changed().unwrap());

    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.draft, "Buy milk");

    // Reading the snapshot marks it seen
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_noop_actions_do_not_notify() {
    let mut store = TaskStore::new();
    let rx = store.subscribe();

    // Adding from an empty draft is a silent no-op
    let changed = store.dispatch(TaskAction::AddTask);
    assert!(!changed);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_rejected_actions_do_not_notify() {
    let mut store = TaskStore::new();
    let rx = store.subscribe();

    let changed = store.dispatch(TaskAction::DeleteTask(0));
    assert!(!changed);
    assert!(!rx.has_changed().unwrap());
    assert!(store.state().tasks.is_empty());
}

#[tokio::test]
async fn test_snapshot_reflects_full_state() {
    let mut store = TaskStore::new();
    let mut rx = store.subscribe();

    store.dispatch(TaskAction::SetDraft("Buy milk".to_string()));
    store.dispatch(TaskAction::AddTask);
    store.dispatch(TaskAction::ToggleComplete(0));

    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].text, "Buy milk");
    assert!(snapshot.tasks[0].is_completed);
    assert!(snapshot.draft.is_empty());
}
