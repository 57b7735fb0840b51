use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    pub notification_id: String,
    pub user_id: String,
    pub kind: String, // mention | assignment | system
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadAllPayload {
    pub user_id: String,
}
