// In-memory task list store

use crate::filter::Filter;
use crate::task::{Task, TaskId};
use tracing::debug;

/// Ordered task collection with a completion filter and a pending input buffer
///
/// The four mutation entry points are `add`, `toggle_complete`, `delete` and
/// `set_filter`. Invalid input (blank text, unknown ids) is a silent no-op.
#[derive(Debug, Clone)]
pub struct TaskList {
    /// Newest first
    tasks: Vec<Task>,
    filter: Filter,
    input: String,
    next_id: u64,
}

/// Filtered projection of a `TaskList`, in list order
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub tasks: Vec<&'a Task>,
    pub count: usize,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    /// Create an empty list that shows completed tasks
    pub fn new() -> Self {
        Self::with_filter(Filter::ALL)
    }

    pub fn with_filter(filter: Filter) -> Self {
        Self {
            tasks: Vec::new(),
            filter,
            input: String::new(),
            next_id: 1,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a task at the front of the list
    ///
    /// Returns `None` without touching any state when `text` is blank.
    /// On success the pending input buffer is cleared.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!("add: blank text ignored");
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;

        self.tasks.insert(0, Task::new(id, text));
        self.input.clear();

        debug!(%id, len = self.tasks.len(), "add: task created");
        Some(id)
    }

    /// Add the pending input buffer as a task
    pub fn submit(&mut self) -> Option<TaskId> {
        let text = std::mem::take(&mut self.input);
        let id = self.add(&text);
        if id.is_none() {
            // Blank submits leave the buffer as typed
            self.input = text;
        }
        id
    }

    /// Flip `completed` on the matching task; returns false if none matched
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "toggle_complete: flipped");
                true
            }
            None => {
                debug!(%id, "toggle_complete: no such task");
                false
            }
        }
    }

    /// Remove the matching task, preserving the order of the rest
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                debug!(%id, len = self.tasks.len(), "delete: removed");
                Some(removed)
            }
            None => {
                debug!(%id, "delete: no such task");
                None
            }
        }
    }

    pub fn set_filter(&mut self, show_completed: bool) {
        self.filter = Filter { show_completed };
        debug!(filter = %self.filter, "set_filter");
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Derived view, recomputed on every call
    pub fn view(&self) -> View<'_> {
        let tasks: Vec<&Task> = self.tasks.iter().filter(|t| self.filter.matches(t)).collect();
        let count = tasks.len();
        View { tasks, count }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks, newest first, regardless of filter
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
