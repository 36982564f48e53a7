use chrono::Utc;
use thiserror::Error;

use crate::model::{Status, Task};
use crate::store::Store;

/// Validation failures and the not-found outcome. Operations return before
/// touching the store on any of these, so the caller never persists a
/// rejected mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpsError {
    #[error("invalid id: must be a positive integer")]
    InvalidId,

    #[error("task description must not be empty")]
    EmptyDescription,

    #[error("task {0} not found")]
    NotFound(u64),
}

/// Appends a new Todo task and returns its id.
pub fn add_task(store: &mut Store, description: &str) -> Result<u64, OpsError> {
    if description.is_empty() {
        return Err(OpsError::EmptyDescription);
    }
    let id = store.allocate_id();
    store.tasks_mut().push(Task::new(id, description.to_string()));
    Ok(id)
}

/// Replaces the description of the task with `id` and refreshes its
/// updated_at. Id, created_at, and status are untouched.
pub fn update_task(store: &mut Store, id: u64, description: &str) -> Result<(), OpsError> {
    if id == 0 {
        return Err(OpsError::InvalidId);
    }
    if description.is_empty() {
        return Err(OpsError::EmptyDescription);
    }
    let task = store
        .tasks_mut()
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(OpsError::NotFound(id))?;
    task.description = description.to_string();
    task.updated_at = Utc::now();
    Ok(())
}

pub fn delete_task(store: &mut Store, id: u64) -> Result<(), OpsError> {
    if id == 0 {
        return Err(OpsError::InvalidId);
    }
    let pos = store
        .tasks()
        .iter()
        .position(|t| t.id == id)
        .ok_or(OpsError::NotFound(id))?;
    store.tasks_mut().remove(pos);
    Ok(())
}

/// Any status may transition to any other; there is no terminal state.
pub fn set_status(store: &mut Store, id: u64, status: Status) -> Result<(), OpsError> {
    if id == 0 {
        return Err(OpsError::InvalidId);
    }
    let task = store
        .tasks_mut()
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(OpsError::NotFound(id))?;
    task.status = status;
    task.updated_at = Utc::now();
    Ok(())
}

/// Selection criterion for list_tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Status(Status),
}

impl Filter {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Status(Status::parse(s)?))
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status == status,
        }
    }
}

/// Returns matching tasks in store order. Read-only.
pub fn list_tasks(store: &Store, filter: Filter) -> Vec<Task> {
    store
        .tasks()
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}
