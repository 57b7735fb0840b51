use super::model::{CreateProjectPayload, Project, UpdateProjectPayload};
use crate::document::Document;

pub fn list_projects(doc: &Document, workspace_id: Option<&str>) -> Vec<Project> {
    doc.projects
        .iter()
        .filter(|p| workspace_id.map_or(true, |w| p.workspace_id == w))
        .cloned()
        .collect()
}

/// Create a project inside an existing workspace.
pub fn create_project(
    doc: &mut Document,
    payload: CreateProjectPayload,
) -> Result<Project, String> {
    if !doc
        .workspaces
        .iter()
        .any(|w| w.workspace_id == payload.workspace_id)
    {
        return Err("Workspace not found".to_string());
    }
    let project = Project {
        project_id: uuid::Uuid::new_v4().to_string(),
        workspace_id: payload.workspace_id,
        project_name: payload.project_name,
        project_description: payload.project_description.unwrap_or_default(),
        project_state: "active".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        updated_at: None,
    };
    doc.projects.push(project.clone());
    Ok(project)
}

pub fn get_project(doc: &Document, project_id: &str) -> Result<Project, String> {
    doc.projects
        .iter()
        .find(|p| p.project_id == project_id)
        .cloned()
        .ok_or_else(|| "Project not found".to_string())
}

pub fn update_project(
    doc: &mut Document,
    project_id: &str,
    payload: UpdateProjectPayload,
) -> Result<Project, String> {
    let project = doc
        .projects
        .iter_mut()
        .find(|p| p.project_id == project_id)
        .ok_or_else(|| "Project not found".to_string())?;

    if let Some(name) = payload.project_name {
        project.project_name = name;
    }
    if let Some(description) = payload.project_description {
        project.project_description = description;
    }
    if let Some(state) = payload.project_state {
        project.project_state = state;
    }
    project.updated_at = Some(chrono::Utc::now().to_rfc3339());
    Ok(project.clone())
}

/// Remove the project and its tasks. Same cut-off as workspace deletion:
/// comments and time entries on the removed tasks stay behind.
pub fn delete_project(doc: &mut Document, project_id: &str) -> Result<(), String> {
    let idx = doc
        .projects
        .iter()
        .position(|p| p.project_id == project_id)
        .ok_or_else(|| "Project not found".to_string())?;
    doc.projects.remove(idx);
    doc.tasks
        .retain(|t| t.project_id.as_deref() != Some(project_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::model::CreateWorkspacePayload;
    use crate::workspaces::service::create_workspace;

    #[test]
    fn create_rejects_unknown_workspace() {
        let mut doc = Document::default();
        let err = create_project(
            &mut doc,
            CreateProjectPayload {
                workspace_id: "nope".to_string(),
                project_name: "Orphan".to_string(),
                project_description: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, "Workspace not found");
    }

    #[test]
    fn delete_removes_project_tasks() {
        let mut doc = Document::default();
        let ws = create_workspace(
            &mut doc,
            CreateWorkspacePayload {
                workspace_name: "W".to_string(),
                workspace_description: None,
                owner_id: "u1".to_string(),
            },
        );
        let project = create_project(
            &mut doc,
            CreateProjectPayload {
                workspace_id: ws.workspace_id,
                project_name: "P".to_string(),
                project_description: None,
            },
        )
        .unwrap();
        crate::tasks::service::create_task(
            &mut doc,
            crate::tasks::model::CreateTaskPayload {
                task_title: "T".to_string(),
                task_description: None,
                project_id: Some(project.project_id.clone()),
                workspace_id: None,
                task_state: None,
                priority: None,
                assignees: None,
                tags: None,
                dependencies: None,
                estimated_hours: None,
                phase_id: None,
                month_id: None,
                week_id: None,
            },
        );
        delete_project(&mut doc, &project.project_id).unwrap();
        assert!(doc.projects.is_empty());
        assert!(doc.tasks.is_empty());
    }
}
