use serde::{Deserialize, Serialize};

/// Task domain model - a unit of work in a project, or a roadmap item
/// when the phase/month/week linkage is set.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub task_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    pub task_title: String,
    #[serde(default)]
    pub task_description: String,

    /// Project tasks: "todo" | "in_progress" | "in_review" | "done" | "blocked"
    /// Roadmap tasks: "pending" | "in_progress" | "completed" | "blocked" | "cancelled"
    pub task_state: String,
    pub priority: String, // "low" | "medium" | "high"

    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ids of tasks this one depends on. Stored, never enforced.
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub estimated_hours: f64,
    /// Running sum, only ever incremented by the time-entry recording path.
    #[serde(default)]
    pub actual_hours: f64,

    // Roadmap linkage, absent on project tasks
    #[serde(default)]
    pub phase_id: Option<String>,
    #[serde(default)]
    pub month_id: Option<String>,
    #[serde(default)]
    pub week_id: Option<String>,

    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskPayload {
    pub task_title: String,
    pub task_description: Option<String>,
    pub project_id: Option<String>,
    pub workspace_id: Option<String>,
    pub task_state: Option<String>,
    pub priority: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
    pub estimated_hours: Option<f64>,
    pub phase_id: Option<String>,
    pub month_id: Option<String>,
    pub week_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskPayload {
    pub task_title: Option<String>,
    pub task_description: Option<String>,
    pub task_state: Option<String>,
    pub priority: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
    pub estimated_hours: Option<f64>,
}
