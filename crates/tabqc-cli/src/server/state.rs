//! Application state for the HTTP server.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::tasks::TaskStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registry of asynchronous validation tasks.
    pub tasks: Arc<RwLock<TaskStore>>,
}

impl AppState {
    /// Create new application state with the given task capacity.
    pub fn new(max_tasks: usize) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(TaskStore::new(max_tasks))),
        }
    }
}
