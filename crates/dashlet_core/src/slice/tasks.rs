//! Tasks slice: the ordered task board.
//!
//! # Responsibility
//! - Own the task array; array index is display and drag order.
//!
//! # Invariants
//! - Task ids are unique even when two creates land in the same millisecond.
//! - `Reorder` interprets the destination index against the array state after
//!   removal, matching splice-insert drag semantics.
//! - `Toggle`/`Remove` with an absent id are deliberate no-ops.

use crate::clock::Stamp;
use crate::model::Task;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tasks slice state. Serialized as-is into the backup snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TasksState {
    pub tasks: Vec<Task>,
}

impl TasksState {
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    pub fn incomplete_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }
}

/// Reorder failure: an index outside the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} out of range for {len} tasks")
            }
        }
    }
}

impl Error for TaskError {}

/// Tagged intents for the tasks slice.
#[derive(Debug, Clone, PartialEq)]
pub enum TasksIntent {
    Add { text: String, stamp: Stamp },
    Toggle(i64),
    Remove(i64),
    Reorder {
        source_index: usize,
        destination_index: usize,
    },
    /// Carries the adapter's read result so the transition stays pure.
    Load(Vec<Task>),
}

/// Applies one intent to the task board. Only `Reorder` carries an error path.
pub fn apply(state: &mut TasksState, intent: TasksIntent) -> Result<(), TaskError> {
    match intent {
        TasksIntent::Add { text, stamp } => {
            let task = Task {
                id: next_id(&state.tasks, stamp.epoch_ms),
                text,
                completed: false,
                created_at: stamp.rfc3339,
            };
            state.tasks.push(task);
            Ok(())
        }
        TasksIntent::Toggle(id) => {
            if let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) {
                task.completed = !task.completed;
            }
            Ok(())
        }
        TasksIntent::Remove(id) => {
            state.tasks.retain(|task| task.id != id);
            Ok(())
        }
        TasksIntent::Reorder {
            source_index,
            destination_index,
        } => {
            let len = state.tasks.len();
            if source_index >= len {
                return Err(TaskError::IndexOutOfRange {
                    index: source_index,
                    len,
                });
            }
            if destination_index >= len {
                return Err(TaskError::IndexOutOfRange {
                    index: destination_index,
                    len,
                });
            }
            let moved = state.tasks.remove(source_index);
            state.tasks.insert(destination_index, moved);
            Ok(())
        }
        TasksIntent::Load(stored) => {
            state.tasks = stored;
            Ok(())
        }
    }
}

/// Derives a creation-ordered id, bumping past the current maximum when the
/// stamp collides with an existing id.
fn next_id(tasks: &[Task], epoch_ms: i64) -> i64 {
    match tasks.iter().map(|task| task.id).max() {
        Some(last) if epoch_ms <= last => last + 1,
        _ => epoch_ms,
    }
}
