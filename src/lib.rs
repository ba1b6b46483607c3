//! Taskpad - A keyboard-driven todo list for the terminal
//!
//! This library provides a small interactive todo list built with Ratatui.
//! All task state lives in memory and flows one way: key events become
//! actions, actions are applied by a single reducer, and the UI re-renders
//! from the snapshots the task store broadcasts.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`tasks`] - Task list state, actions, and the reducer that applies them
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - Log setup and the in-memory log buffer

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory buffer behind the logs dialog
pub mod logger;

/// Task list state and the reducer that applies actions to it
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the task domain types for convenient access
pub use tasks::{EditSession, Task, TaskAction, TaskError, TaskListState, TaskStore};
