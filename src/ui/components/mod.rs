//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod draft_input_component;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use draft_input_component::DraftInputComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
