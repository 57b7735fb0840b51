use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub comment_id: String,
    pub task_id: String,
    pub author_id: String,
    pub content: String,
    /// User ids called out in the comment body.
    #[serde(default)]
    pub mentions: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentPayload {
    pub content: String,
    pub mentions: Option<Vec<String>>,
}
