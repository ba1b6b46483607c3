use taskpad::tasks::{EditSession, Task, TaskAction, TaskError, TaskListState};

/// Build a state holding the given tasks, all pending.
fn list_of(texts: &[&str]) -> TaskListState {
    let mut state = TaskListState::new();
    for text in texts {
        state.apply(TaskAction::SetDraft((*text).to_string())).unwrap();
        state.apply(TaskAction::AddTask).unwrap();
    }
    state
}

#[test]
fn test_add_task_appends_and_clears_draft() {
    let mut state = TaskListState::new();

    let changed = state.apply(TaskAction::SetDraft("Buy milk".to_string())).unwrap();
    assert!(changed);
    assert_eq!(state.draft, "Buy milk");

    let changed = state.apply(TaskAction::AddTask).unwrap();
    assert!(changed);
    assert_eq!(state.tasks, vec![Task::new("Buy milk")]);
    assert!(state.draft.is_empty(), "draft should be cleared after adding");
    assert!(!state.tasks[0].is_completed, "new tasks start pending");
}

#[test]
fn test_add_task_with_empty_draft_is_ignored() {
    let mut state = TaskListState::new();

    // However often it is tried
    for _ in 0..3 {
        let changed = state.apply(TaskAction::AddTask).unwrap();
        assert!(!changed);
    }
    assert!(state.tasks.is_empty());
}

#[test]
fn test_add_task_keeps_text_verbatim() {
    // Whitespace is not trimmed, even when the text is whitespace only
    let mut state = TaskListState::new();
    state.apply(TaskAction::SetDraft("  spaced out  ".to_string())).unwrap();
    state.apply(TaskAction::AddTask).unwrap();
    assert_eq!(state.tasks[0].text, "  spaced out  ");

    state.apply(TaskAction::SetDraft("   ".to_string())).unwrap();
    let changed = state.apply(TaskAction::AddTask).unwrap();
    assert!(changed);
    assert_eq!(state.tasks[1].text, "   ");
}

#[test]
fn test_set_draft_identical_text_reports_no_change() {
    let mut state = TaskListState::new();
    state.apply(TaskAction::SetDraft("same".to_string())).unwrap();

    let changed = state.apply(TaskAction::SetDraft("same".to_string())).unwrap();
    assert!(!changed);
}

#[test]
fn test_toggle_complete_flips_and_restores() {
    let mut state = list_of(&["Buy milk"]);

    state.apply(TaskAction::ToggleComplete(0)).unwrap();
    assert!(state.tasks[0].is_completed);

    // Toggling twice lands back where it started
    state.apply(TaskAction::ToggleComplete(0)).unwrap();
    assert!(!state.tasks[0].is_completed);
    assert_eq!(state.tasks[0].text, "Buy milk");
}

#[test]
fn test_toggle_complete_out_of_range_is_rejected() {
    let mut state = list_of(&["Buy milk"]);
    let before = state.clone();

    let err = state.apply(TaskAction::ToggleComplete(1)).unwrap_err();
    assert_eq!(err, TaskError::IndexOutOfRange { index: 1, len: 1 });
    assert_eq!(state, before, "rejected actions must not touch the state");
}

#[test]
fn test_delete_task_preserves_order() {
    let mut state = list_of(&["one", "two", "three"]);

    state.apply(TaskAction::DeleteTask(1)).unwrap();

    let texts: Vec<&str> = state.tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "three"]);
}

#[test]
fn test_delete_task_out_of_range_leaves_state_untouched() {
    let mut state = list_of(&["one", "two"]);
    let before = state.clone();

    let err = state.apply(TaskAction::DeleteTask(5)).unwrap_err();
    assert_eq!(err, TaskError::IndexOutOfRange { index: 5, len: 2 });
    assert_eq!(state, before);
}

#[test]
fn test_edit_flow_commits_new_text() {
    let mut state = list_of(&["Walk dog"]);

    state.apply(TaskAction::StartEdit(0)).unwrap();
    // The session starts from the task's current text
    assert_eq!(
        state.edit,
        Some(EditSession {
            index: 0,
            draft: "Walk dog".to_string()
        })
    );

    state.apply(TaskAction::SetEditDraft("Walk the dog".to_string())).unwrap();
    assert_eq!(state.tasks[0].text, "Walk dog", "text changes only on save");

    let changed = state.apply(TaskAction::SaveEdit).unwrap();
    assert!(changed);
    assert_eq!(state.tasks[0].text, "Walk the dog");
    assert!(state.edit.is_none(), "saving ends the session");
}

#[test]
fn test_save_edit_allows_empty_text() {
    let mut state = list_of(&["Walk dog"]);

    state.apply(TaskAction::StartEdit(0)).unwrap();
    state.apply(TaskAction::SetEditDraft(String::new())).unwrap();
    state.apply(TaskAction::SaveEdit).unwrap();

    assert_eq!(state.tasks[0].text, "");
}

#[test]
fn test_save_edit_keeps_completion_flag() {
    let mut state = list_of(&["Walk dog"]);
    state.apply(TaskAction::ToggleComplete(0)).unwrap();

    state.apply(TaskAction::StartEdit(0)).unwrap();
    state.apply(TaskAction::SetEditDraft("Walk the dog".to_string())).unwrap();
    state.apply(TaskAction::SaveEdit).unwrap();

    assert!(state.tasks[0].is_completed);
}

#[test]
fn test_cancel_edit_discards_changes() {
    let mut state = list_of(&["Walk dog"]);

    state.apply(TaskAction::StartEdit(0)).unwrap();
    state.apply(TaskAction::SetEditDraft("scrapped".to_string())).unwrap();
    let changed = state.apply(TaskAction::CancelEdit).unwrap();

    assert!(changed);
    assert_eq!(state.tasks[0].text, "Walk dog");
    assert!(state.edit.is_none());
}

#[test]
fn test_start_edit_replaces_active_session() {
    let mut state = list_of(&["one", "two"]);

    state.apply(TaskAction::StartEdit(0)).unwrap();
    state.apply(TaskAction::SetEditDraft("half-typed".to_string())).unwrap();

    // Starting another edit drops the unsaved text of the first
    state.apply(TaskAction::StartEdit(1)).unwrap();
    assert_eq!(
        state.edit,
        Some(EditSession {
            index: 1,
            draft: "two".to_string()
        })
    );

    state.apply(TaskAction::SaveEdit).unwrap();
    assert_eq!(state.tasks[0].text, "one");
}

#[test]
fn test_start_edit_out_of_range_is_rejected() {
    let mut state = list_of(&["one"]);

    let err = state.apply(TaskAction::StartEdit(3)).unwrap_err();
    assert_eq!(err, TaskError::IndexOutOfRange { index: 3, len: 1 });
    assert!(state.edit.is_none());
}

#[test]
fn test_edit_actions_without_session_are_ignored() {
    let mut state = list_of(&["one"]);
    let before = state.clone();

    assert!(!state.apply(TaskAction::SetEditDraft("text".to_string())).unwrap());
    assert!(!state.apply(TaskAction::SaveEdit).unwrap());
    assert!(!state.apply(TaskAction::CancelEdit).unwrap());
    assert_eq!(state, before);
}

#[test]
fn test_delete_edited_row_ends_session() {
    let mut state = list_of(&["one", "two"]);

    state.apply(TaskAction::StartEdit(1)).unwrap();
    state.apply(TaskAction::DeleteTask(1)).unwrap();

    assert!(state.edit.is_none());
}

#[test]
fn test_delete_earlier_row_shifts_session_index() {
    let mut state = list_of(&["one", "two", "three"]);

    state.apply(TaskAction::StartEdit(2)).unwrap();
    state.apply(TaskAction::SetEditDraft("three, edited".to_string())).unwrap();
    state.apply(TaskAction::DeleteTask(0)).unwrap();

    // The session follows its task to the new position
    assert_eq!(state.edit.as_ref().map(|s| s.index), Some(1));

    state.apply(TaskAction::SaveEdit).unwrap();
    assert_eq!(state.tasks[1].text, "three, edited");
}

#[test]
fn test_delete_later_row_keeps_session() {
    let mut state = list_of(&["one", "two", "three"]);

    state.apply(TaskAction::StartEdit(0)).unwrap();
    state.apply(TaskAction::DeleteTask(2)).unwrap();

    assert_eq!(state.edit.as_ref().map(|s| s.index), Some(0));
}

#[test]
fn test_completed_count() {
    let mut state = list_of(&["one", "two", "three"]);
    assert_eq!(state.completed_count(), 0);

    state.apply(TaskAction::ToggleComplete(0)).unwrap();
    state.apply(TaskAction::ToggleComplete(2)).unwrap();
    assert_eq!(state.completed_count(), 2);
}

#[test]
fn test_interleaved_operations_keep_list_consistent() {
    let mut state = TaskListState::new();

    state.apply(TaskAction::SetDraft("Buy milk".to_string())).unwrap();
    state.apply(TaskAction::AddTask).unwrap();
    state.apply(TaskAction::SetDraft("Walk dog".to_string())).unwrap();
    state.apply(TaskAction::AddTask).unwrap();

    state.apply(TaskAction::ToggleComplete(0)).unwrap();

    state.apply(TaskAction::StartEdit(1)).unwrap();
    state.apply(TaskAction::SetEditDraft("Walk the dog".to_string())).unwrap();
    state.apply(TaskAction::SaveEdit).unwrap();

    state.apply(TaskAction::DeleteTask(0)).unwrap();

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].text, "Walk the dog");
    assert!(!state.tasks[0].is_completed);
    assert!(state.edit.is_none());
    assert!(state.draft.is_empty());
}
