use super::model::{CreateTaskPayload, Task, UpdateTaskPayload};
use crate::document::Document;

/// List tasks, optionally narrowed by project, workspace or state.
pub fn list_tasks(
    doc: &Document,
    project_id: Option<&str>,
    workspace_id: Option<&str>,
    task_state: Option<&str>,
) -> Vec<Task> {
    doc.tasks
        .iter()
        .filter(|t| project_id.map_or(true, |p| t.project_id.as_deref() == Some(p)))
        .filter(|t| workspace_id.map_or(true, |w| t.workspace_id.as_deref() == Some(w)))
        .filter(|t| task_state.map_or(true, |s| t.task_state == s))
        .cloned()
        .collect()
}

pub fn create_task(doc: &mut Document, payload: CreateTaskPayload) -> Task {
    let task = Task {
        task_id: uuid::Uuid::new_v4().to_string(),
        project_id: payload.project_id,
        workspace_id: payload.workspace_id,
        task_title: payload.task_title,
        task_description: payload.task_description.unwrap_or_default(),
        task_state: payload.task_state.unwrap_or_else(|| "todo".to_string()),
        priority: payload.priority.unwrap_or_else(|| "medium".to_string()),
        assignees: payload.assignees.unwrap_or_default(),
        tags: payload.tags.unwrap_or_default(),
        dependencies: payload.dependencies.unwrap_or_default(),
        estimated_hours: payload.estimated_hours.unwrap_or(0.0),
        actual_hours: 0.0,
        phase_id: payload.phase_id,
        month_id: payload.month_id,
        week_id: payload.week_id,
        created_at: chrono::Utc::now().to_rfc3339(),
        updated_at: None,
    };
    doc.tasks.push(task.clone());
    task
}

pub fn get_task(doc: &Document, task_id: &str) -> Result<Task, String> {
    doc.tasks
        .iter()
        .find(|t| t.task_id == task_id)
        .cloned()
        .ok_or_else(|| "Task not found".to_string())
}

/// Shallow-merge the optional payload fields into the stored task.
pub fn update_task(
    doc: &mut Document,
    task_id: &str,
    payload: UpdateTaskPayload,
) -> Result<Task, String> {
    let task = doc
        .tasks
        .iter_mut()
        .find(|t| t.task_id == task_id)
        .ok_or_else(|| "Task not found".to_string())?;

    if let Some(title) = payload.task_title {
        task.task_title = title;
    }
    if let Some(description) = payload.task_description {
        task.task_description = description;
    }
    if let Some(state) = payload.task_state {
        task.task_state = state;
    }
    if let Some(priority) = payload.priority {
        task.priority = priority;
    }
    if let Some(assignees) = payload.assignees {
        task.assignees = assignees;
    }
    if let Some(tags) = payload.tags {
        task.tags = tags;
    }
    if let Some(dependencies) = payload.dependencies {
        task.dependencies = dependencies;
    }
    if let Some(estimated) = payload.estimated_hours {
        task.estimated_hours = estimated;
    }
    task.updated_at = Some(chrono::Utc::now().to_rfc3339());
    Ok(task.clone())
}

/// Remove the task itself. Comments and time entries that reference it
/// are left in place.
pub fn delete_task(doc: &mut Document, task_id: &str) -> Result<(), String> {
    let idx = doc
        .tasks
        .iter()
        .position(|t| t.task_id == task_id)
        .ok_or_else(|| "Task not found".to_string())?;
    doc.tasks.remove(idx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> CreateTaskPayload {
        CreateTaskPayload {
            task_title: title.to_string(),
            task_description: None,
            project_id: Some("p1".to_string()),
            workspace_id: Some("w1".to_string()),
            task_state: None,
            priority: None,
            assignees: None,
            tags: None,
            dependencies: None,
            estimated_hours: Some(2.0),
            phase_id: None,
            month_id: None,
            week_id: None,
        }
    }

    #[test]
    fn create_defaults_state_and_priority() {
        let mut doc = Document::default();
        let task = create_task(&mut doc, payload("Write report"));
        assert_eq!(task.task_state, "todo");
        assert_eq!(task.priority, "medium");
        assert_eq!(task.actual_hours, 0.0);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut doc = Document::default();
        let task = create_task(&mut doc, payload("Write report"));
        let updated = update_task(
            &mut doc,
            &task.task_id,
            UpdateTaskPayload {
                task_title: None,
                task_description: None,
                task_state: Some("in_progress".to_string()),
                priority: None,
                assignees: None,
                tags: None,
                dependencies: None,
                estimated_hours: None,
            },
        )
        .unwrap();
        assert_eq!(updated.task_title, "Write report");
        assert_eq!(updated.task_state, "in_progress");
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn list_filters_by_state() {
        let mut doc = Document::default();
        create_task(&mut doc, payload("a"));
        let b = create_task(&mut doc, payload("b"));
        update_task(
            &mut doc,
            &b.task_id,
            UpdateTaskPayload {
                task_title: None,
                task_description: None,
                task_state: Some("done".to_string()),
                priority: None,
                assignees: None,
                tags: None,
                dependencies: None,
                estimated_hours: None,
            },
        )
        .unwrap();
        let done = list_tasks(&doc, None, None, Some("done"));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].task_title, "b");
    }

    #[test]
    fn delete_unknown_task_errors() {
        let mut doc = Document::default();
        assert!(delete_task(&mut doc, "missing").is_err());
    }
}
