use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub project_id: String,
    pub workspace_id: String,
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
    pub project_state: String, // active | on_hold | completed | archived
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectPayload {
    pub workspace_id: String,
    pub project_name: String,
    pub project_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectPayload {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub project_state: Option<String>,
}
