use serde::{Deserialize, Serialize};

/// Append-only log line, one per noteworthy task event.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActivityEntry {
    pub activity_id: String,
    pub task_id: String,
    pub user_id: String,
    pub action: String, // commented | state_changed | ...
    pub created_at: String,
}
