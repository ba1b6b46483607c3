//! Core UI functionality for the Taskpad application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, and the action types that
//! connect components to the task store.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard input handling
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//!
//! Components never mutate the task list themselves: they emit actions, the
//! application applies them through the store, and components re-render from
//! the snapshots the store broadcasts.

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
