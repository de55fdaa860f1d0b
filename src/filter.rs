// Completion filter for the derived view

use crate::task::Task;

/// Which tasks the derived view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// When false, completed tasks are hidden
    pub show_completed: bool,
}

impl Filter {
    pub const ALL: Filter = Filter { show_completed: true };
    pub const ACTIVE: Filter = Filter { show_completed: false };

    pub fn matches(&self, task: &Task) -> bool {
        self.show_completed || !task.completed
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.show_completed {
            write!(f, "all")
        } else {
            write!(f, "active")
        }
    }
}
