use super::model::{CreateWorkspacePayload, UpdateWorkspacePayload, Workspace, WorkspaceMember};
use crate::document::Document;

pub fn list_workspaces(doc: &Document, user_id: Option<&str>) -> Vec<Workspace> {
    doc.workspaces
        .iter()
        .filter(|w| {
            user_id.map_or(true, |u| {
                w.owner_id == u || w.members.iter().any(|m| m.user_id == u)
            })
        })
        .cloned()
        .collect()
}

pub fn create_workspace(doc: &mut Document, payload: CreateWorkspacePayload) -> Workspace {
    let workspace = Workspace {
        workspace_id: uuid::Uuid::new_v4().to_string(),
        workspace_name: payload.workspace_name,
        workspace_description: payload.workspace_description.unwrap_or_default(),
        owner_id: payload.owner_id.clone(),
        members: vec![WorkspaceMember {
            user_id: payload.owner_id,
            role: "owner".to_string(),
        }],
        settings: serde_json::Value::Null,
        workspace_state: "active".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        updated_at: None,
    };
    doc.workspaces.push(workspace.clone());
    workspace
}

pub fn get_workspace(doc: &Document, workspace_id: &str) -> Result<Workspace, String> {
    doc.workspaces
        .iter()
        .find(|w| w.workspace_id == workspace_id)
        .cloned()
        .ok_or_else(|| "Workspace not found".to_string())
}

pub fn update_workspace(
    doc: &mut Document,
    workspace_id: &str,
    payload: UpdateWorkspacePayload,
) -> Result<Workspace, String> {
    let workspace = doc
        .workspaces
        .iter_mut()
        .find(|w| w.workspace_id == workspace_id)
        .ok_or_else(|| "Workspace not found".to_string())?;

    if let Some(name) = payload.workspace_name {
        workspace.workspace_name = name;
    }
    if let Some(description) = payload.workspace_description {
        workspace.workspace_description = description;
    }
    if let Some(state) = payload.workspace_state {
        workspace.workspace_state = state;
    }
    if let Some(members) = payload.members {
        workspace.members = members;
    }
    if let Some(settings) = payload.settings {
        workspace.settings = settings;
    }
    workspace.updated_at = Some(chrono::Utc::now().to_rfc3339());
    Ok(workspace.clone())
}

/// Remove the workspace together with its projects and tasks.
/// Comments and time entries pointing at the removed tasks are left
/// in place; nothing cascades past the task level.
pub fn delete_workspace(doc: &mut Document, workspace_id: &str) -> Result<(), String> {
    let idx = doc
        .workspaces
        .iter()
        .position(|w| w.workspace_id == workspace_id)
        .ok_or_else(|| "Workspace not found".to_string())?;
    doc.workspaces.remove(idx);
    doc.projects.retain(|p| p.workspace_id != workspace_id);
    doc.tasks
        .retain(|t| t.workspace_id.as_deref() != Some(workspace_id));
    Ok(())
}
