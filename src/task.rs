// Task model for the to-do list

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task within one `TaskList`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Milliseconds since epoch, fixed at creation
    pub created_at: i64,
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: now_ms(),
            completed: false,
        }
    }

    /// Creation time as local `MM/dd HH:mm`
    pub fn created_at_display(&self) -> String {
        match Local.timestamp_millis_opt(self.created_at).single() {
            Some(dt) => dt.format("%m/%d %H:%M").to_string(),
            None => String::new(),
        }
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
