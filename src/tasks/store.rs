//! Owning store for the task list state, with change broadcast

use log::{debug, warn};
use tokio::sync::watch;

use super::{TaskAction, TaskListState};

/// Single writer for the task list state.
///
/// The store owns the state and broadcasts a snapshot through a watch
/// channel after every applied action. The UI holds a receiver and
/// re-renders when it observes a new snapshot; tests subscribe the same
/// way. Rejected and no-op actions do not notify subscribers.
pub struct TaskStore {
    state: TaskListState,
    tx: watch::Sender<TaskListState>,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        let state = TaskListState::new();
        let (tx, _rx) = watch::channel(state.clone());
        Self { state, tx }
    }

    /// The current state, for the writer's own reads.
    #[must_use]
    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Subscribe to state snapshots. The snapshot current at subscription
    /// time is marked as seen; the receiver is flagged after every applied
    /// action from then on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskListState> {
        self.tx.subscribe()
    }

    /// Apply an action and broadcast the new state if it changed.
    ///
    /// Returns whether the state changed. Rejections (out-of-range
    /// indices) are logged and swallowed; the state stays as it was.
    pub fn dispatch(&mut self, action: TaskAction) -> bool {
        let description = format!("{action:?}");
        match self.state.apply(action) {
            Ok(true) => {
                debug!("applied {description}");
                self.tx.send_replace(self.state.clone());
                true
            }
            Ok(false) => false,
            Err(err) => {
                warn!("rejected {description}: {err}");
                false
            }
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
