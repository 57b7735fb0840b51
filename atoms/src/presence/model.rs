use serde::{Deserialize, Serialize};

/// Last-seen heartbeat for one user. A user counts as online while the
/// heartbeat is fresher than the 30-second window.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Presence {
    pub user_id: String,
    pub user_name: String,
    pub last_seen: String,
}

#[derive(Debug, Deserialize)]
pub struct HeartbeatPayload {
    pub user_id: String,
    pub user_name: String,
}

/// Presence record decorated with the freshness verdict.
#[derive(Debug, Serialize)]
pub struct OnlineStatus {
    pub user_id: String,
    pub user_name: String,
    pub last_seen: String,
    pub online: bool,
}
