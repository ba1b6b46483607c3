//! Task list domain model
//!
//! This module owns the application state: the ordered task list, the
//! draft text for the add input, and the optional inline edit session.
//! All mutations go through [`TaskListState::apply`], which takes a
//! [`TaskAction`] and either applies it or rejects it without touching
//! the state. The UI layer never mutates tasks directly; it dispatches
//! actions through the [`TaskStore`] and re-renders from the snapshots
//! the store broadcasts.

pub mod store;

pub use store::TaskStore;

use thiserror::Error;

/// A single todo item: its text and completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub is_completed: bool,
}

impl Task {
    /// Create a pending task with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }
}

/// An in-progress inline edit: which row is being edited and the
/// uncommitted replacement text.
///
/// At most one session exists at a time; starting a new edit replaces
/// the previous session and its unsaved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub index: usize,
    pub draft: String,
}

/// Errors returned by the reducer for index-addressed actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task index {index} is out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Every state transition the UI can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Replace the add-input draft text.
    SetDraft(String),
    /// Append a task built from the current draft and clear the draft.
    /// An empty draft is silently ignored.
    AddTask,
    /// Remove the task at the given position. Later tasks shift down.
    DeleteTask(usize),
    /// Flip the completion flag of the task at the given position.
    ToggleComplete(usize),
    /// Begin editing the task at the given position, seeding the edit
    /// draft with the task's current text. Replaces any active session.
    StartEdit(usize),
    /// Replace the active edit session's uncommitted text.
    SetEditDraft(String),
    /// Commit the active session's text into its task and end the session.
    SaveEdit,
    /// End the active session, discarding its text.
    CancelEdit,
}

/// The complete view state: tasks in insertion order, the add-input
/// draft, and the optional edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub edit: Option<EditSession>,
}

impl TaskListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single action to the state.
    ///
    /// Returns `Ok(true)` when the state changed, `Ok(false)` for the
    /// silent no-op cases (adding from an empty draft, session actions
    /// with no active session, replacing text with identical text), and
    /// an error for index-addressed actions whose index is out of range.
    /// Rejected actions leave the state untouched.
    pub fn apply(&mut self, action: TaskAction) -> Result<bool, TaskError> {
        match action {
            TaskAction::SetDraft(text) => Ok(self.set_draft(text)),
            TaskAction::AddTask => Ok(self.add_task()),
            TaskAction::DeleteTask(index) => self.delete_task(index).map(|()| true),
            TaskAction::ToggleComplete(index) => self.toggle_complete(index).map(|()| true),
            TaskAction::StartEdit(index) => self.start_edit(index).map(|()| true),
            TaskAction::SetEditDraft(text) => Ok(self.set_edit_draft(text)),
            TaskAction::SaveEdit => Ok(self.save_edit()),
            TaskAction::CancelEdit => Ok(self.cancel_edit()),
        }
    }

    fn set_draft(&mut self, text: String) -> bool {
        if self.draft == text {
            return false;
        }
        self.draft = text;
        true
    }

    /// Append a task from the draft. No-op when the draft is empty; the
    /// text is taken verbatim, whitespace included.
    fn add_task(&mut self) -> bool {
        if self.draft.is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.tasks.push(Task::new(text));
        true
    }

    fn delete_task(&mut self, index: usize) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.tasks.remove(index);
        // Keep the edit session pointing at the same task: drop it when
        // its row was deleted, shift it when an earlier row was.
        self.edit = match self.edit.take() {
            Some(session) if session.index == index => None,
            Some(mut session) => {
                if session.index > index {
                    session.index -= 1;
                }
                Some(session)
            }
            None => None,
        };
        Ok(())
    }

    fn toggle_complete(&mut self, index: usize) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.tasks[index].is_completed = !self.tasks[index].is_completed;
        Ok(())
    }

    fn start_edit(&mut self, index: usize) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.edit = Some(EditSession {
            index,
            draft: self.tasks[index].text.clone(),
        });
        Ok(())
    }

    fn set_edit_draft(&mut self, text: String) -> bool {
        match self.edit.as_mut() {
            Some(session) if session.draft != text => {
                session.draft = text;
                true
            }
            _ => false,
        }
    }

    /// Commit the session text verbatim, empty strings included. The
    /// completion flag of the edited task is untouched.
    fn save_edit(&mut self) -> bool {
        let Some(session) = self.edit.take() else {
            return false;
        };
        if let Some(task) = self.tasks.get_mut(session.index) {
            task.text = session.draft;
        }
        true
    }

    fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Number of completed tasks, for the status bar.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}
