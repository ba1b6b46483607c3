//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_TITLE: &str = "Taskpad";

// Configuration locations
/// Config file looked up in the working directory
pub const CONFIG_LOCAL_FILE: &str = "taskpad.toml";
/// Directory name under the XDG config root
pub const CONFIG_DIR_NAME: &str = "taskpad";
/// Config file name under the XDG directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

// UI text
pub const TITLE_TASKS: &str = "Tasks";
pub const TITLE_NEW_TASK: &str = "New Task";
pub const PLACEHOLDER_EMPTY_LIST: &str = "No tasks added yet";
pub const PLACEHOLDER_DRAFT_INPUT: &str = "Enter a new task";

// Status bar hints
pub const HINTS_TASK_LIST: &str = "a: new task • Space: toggle • e: edit • d: delete • ?: help • q: quit";
pub const HINTS_DRAFT_INPUT: &str = "Enter: add • Esc: back to list";
pub const HINTS_EDITING: &str = "Enter: save • Esc: cancel";
pub const HINTS_DIALOG: &str = "j/k: scroll • Esc: close";

// Dialog titles
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Header bar height in rows
pub const HEADER_HEIGHT: u16 = 1;
/// Add-input height in rows, borders included
pub const DRAFT_INPUT_HEIGHT: u16 = 3;
/// Status bar height in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;

// Event Loop Constants
/// Minimum tick rate in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum tick rate in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default tick rate in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
/// Minimum interval between two draws in milliseconds
pub const RENDER_INTERVAL_MS: u64 = 16;

// Logging Constants
/// Maximum number of entries kept in the in-memory log buffer
pub const LOG_BUFFER_CAP: usize = 1000;
