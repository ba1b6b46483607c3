use crate::tasks::TaskAction;

/// Represents the pane that currently owns plain keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TaskList, // Keys drive list navigation and row operations
    DraftInput, // Keys edit the add-input draft
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // Task operations, applied by the task store
    Task(TaskAction),

    // Focus handling
    FocusDraft,
    FocusTasks,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
