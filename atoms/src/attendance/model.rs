use serde::{Deserialize, Serialize};

/// One clock-in/clock-out session for a user on a date. A day may hold
/// several closed sessions, but only one open one at a time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendanceRecord {
    pub record_id: String,
    pub user_id: String,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub work_hours: f64,
    pub status: String, // present | half-day | early-departure
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClockPayload {
    pub user_id: String,
    /// Defaults to today (UTC).
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAttendancePayload {
    pub approved: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CleanupSummary {
    pub removed: usize,
    pub remaining: usize,
}
