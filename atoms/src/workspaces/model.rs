use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkspaceMember {
    pub user_id: String,
    pub role: String, // owner | admin | member
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Workspace {
    pub workspace_id: String,
    pub workspace_name: String,
    #[serde(default)]
    pub workspace_description: String,
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<WorkspaceMember>,
    /// Free-form UI settings blob; stored verbatim, never inspected.
    #[serde(default)]
    pub settings: serde_json::Value,
    pub workspace_state: String, // active | archived
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkspacePayload {
    pub workspace_name: String,
    pub workspace_description: Option<String>,
    pub owner_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkspacePayload {
    pub workspace_name: Option<String>,
    pub workspace_description: Option<String>,
    pub workspace_state: Option<String>,
    pub members: Option<Vec<WorkspaceMember>>,
    pub settings: Option<serde_json::Value>,
}
