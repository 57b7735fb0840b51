use super::model::ActivityEntry;
use crate::document::Document;

pub fn record(doc: &mut Document, task_id: &str, user_id: &str, action: &str) -> ActivityEntry {
    let entry = ActivityEntry {
        activity_id: uuid::Uuid::new_v4().to_string(),
        task_id: task_id.to_string(),
        user_id: user_id.to_string(),
        action: action.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    doc.activity.push(entry.clone());
    entry
}

pub fn list_for_task(doc: &Document, task_id: &str) -> Vec<ActivityEntry> {
    doc.activity
        .iter()
        .filter(|a| a.task_id == task_id)
        .cloned()
        .collect()
}
