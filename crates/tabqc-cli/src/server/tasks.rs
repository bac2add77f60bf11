//! In-memory registry of asynchronous validation tasks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Lifecycle of one validation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Pending,
    Running,
    Done,
    Error,
}

/// State of one task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    pub status: TaskStatus,
    pub result: Option<Value>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Capacity-bounded task map keyed by task id.
///
/// Eviction policy: once the store is at capacity, the next create clears
/// EVERY entry, in-flight tasks included, and a client polling an evicted
/// task sees 404. Blunt, but it is the observed contract of this API; the
/// overflow is logged at warn so operators can size the capacity up.
#[derive(Debug)]
pub struct TaskStore {
    tasks: HashMap<String, TaskInfo>,
    capacity: usize,
}

impl TaskStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            tasks: HashMap::new(),
            capacity,
        }
    }

    /// Register a new task in PENDING state and return its id.
    pub fn create(&mut self) -> String {
        if self.tasks.len() >= self.capacity {
            tracing::warn!(
                capacity = self.capacity,
                "task store at capacity, clearing all entries"
            );
            self.tasks.clear();
        }

        let id = Uuid::new_v4().to_string();
        self.tasks.insert(
            id.clone(),
            TaskInfo {
                status: TaskStatus::Pending,
                result: None,
                error: None,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn get(&self, id: &str) -> Option<&TaskInfo> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn set_running(&mut self, id: &str) {
        self.update(id, |task| task.status = TaskStatus::Running);
    }

    pub fn set_done(&mut self, id: &str, result: Value) {
        self.update(id, |task| {
            task.status = TaskStatus::Done;
            task.result = Some(result);
        });
    }

    pub fn set_error(&mut self, id: &str, error: String) {
        self.update(id, |task| {
            task.status = TaskStatus::Error;
            task.error = Some(error);
        });
    }

    /// An evicted task may still finish; its update has nowhere to go.
    fn update(&mut self, id: &str, apply: impl FnOnce(&mut TaskInfo)) {
        match self.tasks.get_mut(id) {
            Some(task) => apply(task),
            None => tracing::debug!(task_id = %id, "update for evicted task dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_get() {
        let mut store = TaskStore::new(8);
        let id = store.create();

        let task = store.get(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.result.is_none());
        assert!(task.error.is_none());
    }

    #[test]
    fn test_status_transitions() {
        let mut store = TaskStore::new(8);
        let id = store.create();

        store.set_running(&id);
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Running);

        store.set_done(&id, json!({"structure": {}, "schema": {}}));
        let task = store.get(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert!(task.result.is_some());
    }

    #[test]
    fn test_error_records_message() {
        let mut store = TaskStore::new(8);
        let id = store.create();

        store.set_error(&id, "Malformed rows: nested value".to_string());
        let task = store.get(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Error);
        assert_eq!(task.error.as_deref(), Some("Malformed rows: nested value"));
    }

    #[test]
    fn test_overflow_clears_every_entry() {
        let mut store = TaskStore::new(2);
        let first = store.create();
        let second = store.create();
        assert_eq!(store.len(), 2);

        let third = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.get(&first).is_none());
        assert!(store.get(&second).is_none());
        assert!(store.get(&third).is_some());
    }

    #[test]
    fn test_update_after_eviction_is_dropped() {
        let mut store = TaskStore::new(1);
        let first = store.create();
        let second = store.create();

        store.set_done(&first, json!({}));
        assert!(store.get(&first).is_none());
        assert_eq!(store.get(&second).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let value = serde_json::to_value(TaskStatus::Pending).unwrap();
        assert_eq!(value, json!("PENDING"));
        let value = serde_json::to_value(TaskStatus::Error).unwrap();
        assert_eq!(value, json!("ERROR"));
    }
}
