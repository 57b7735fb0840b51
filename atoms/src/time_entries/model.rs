use serde::{Deserialize, Serialize};

/// A recorded interval of work against a task. Duration is kept in
/// fractional minutes so sub-minute work is not rounded away.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimeEntry {
    pub entry_id: String,
    pub task_id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: f64,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub description: String,
}

/// The one timer the app allows to run at a time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActiveTimer {
    pub task_id: String,
    pub started_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTimeEntryPayload {
    pub task_id: String,
    pub start_time: String,
    pub end_time: String,
    /// Computed from start/end when absent.
    pub duration_minutes: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimerPayload {
    pub task_id: String,
}
