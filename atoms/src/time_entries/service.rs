use super::model::TimeEntry;
use crate::document::Document;

/// Record one interval of work against a task and grow the task's
/// running `actual_hours` by the same amount. This is the only code
/// path that writes task hours.
///
/// A second entry with the same (task_id, start_time) is treated as a
/// duplicate stop: the stored entry is returned and nothing changes.
pub fn record_entry(
    doc: &mut Document,
    task_id: &str,
    start_time: &str,
    end_time: &str,
    duration_minutes: f64,
    date: &str,
    description: &str,
) -> Result<TimeEntry, String> {
    if !doc.tasks.iter().any(|t| t.task_id == task_id) {
        return Err("Task not found".to_string());
    }

    if let Some(existing) = doc
        .time_entries
        .iter()
        .find(|e| e.task_id == task_id && e.start_time == start_time)
    {
        return Ok(existing.clone());
    }

    let entry = TimeEntry {
        entry_id: uuid::Uuid::new_v4().to_string(),
        task_id: task_id.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        duration_minutes,
        date: date.to_string(),
        description: description.to_string(),
    };
    doc.time_entries.push(entry.clone());

    if let Some(task) = doc.tasks.iter_mut().find(|t| t.task_id == task_id) {
        task.actual_hours += duration_minutes / 60.0;
    }
    Ok(entry)
}

pub fn list_entries(doc: &Document, task_id: Option<&str>, date: Option<&str>) -> Vec<TimeEntry> {
    doc.time_entries
        .iter()
        .filter(|e| task_id.map_or(true, |t| e.task_id == t))
        .filter(|e| date.map_or(true, |d| e.date == d))
        .cloned()
        .collect()
}

/// Drop an entry. The owning task's running total is deliberately not
/// recomputed, so totals drift after manual deletes.
pub fn delete_entry(doc: &mut Document, entry_id: &str) -> Result<(), String> {
    let idx = doc
        .time_entries
        .iter()
        .position(|e| e.entry_id == entry_id)
        .ok_or_else(|| "Time entry not found".to_string())?;
    doc.time_entries.remove(idx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::model::CreateTaskPayload;
    use crate::tasks::service::create_task;

    fn seed_task(doc: &mut Document) -> String {
        create_task(
            doc,
            CreateTaskPayload {
                task_title: "Tracked".to_string(),
                task_description: None,
                project_id: None,
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
        )
        .task_id
    }

    #[test]
    fn recording_grows_actual_hours() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);
        let entry = record_entry(
            &mut doc,
            &task_id,
            "2026-08-01T09:00:00Z",
            "2026-08-01T09:30:00Z",
            30.0,
            "2026-08-01",
            "",
        )
        .unwrap();
        assert_eq!(entry.duration_minutes, 30.0);
        assert_eq!(doc.tasks[0].actual_hours, 0.5);
    }

    #[test]
    fn duplicate_start_time_records_nothing() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);
        let first = record_entry(
            &mut doc,
            &task_id,
            "2026-08-01T09:00:00Z",
            "2026-08-01T09:30:00Z",
            30.0,
            "2026-08-01",
            "",
        )
        .unwrap();
        let second = record_entry(
            &mut doc,
            &task_id,
            "2026-08-01T09:00:00Z",
            "2026-08-01T09:30:00Z",
            30.0,
            "2026-08-01",
            "",
        )
        .unwrap();
        assert_eq!(first.entry_id, second.entry_id);
        assert_eq!(doc.time_entries.len(), 1);
        assert_eq!(doc.tasks[0].actual_hours, 0.5);
    }

    #[test]
    fn recording_against_unknown_task_errors() {
        let mut doc = Document::default();
        let err = record_entry(
            &mut doc,
            "missing",
            "2026-08-01T09:00:00Z",
            "2026-08-01T09:30:00Z",
            30.0,
            "2026-08-01",
            "",
        )
        .unwrap_err();
        assert_eq!(err, "Task not found");
    }

    #[test]
    fn delete_leaves_task_total_untouched() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);
        let entry = record_entry(
            &mut doc,
            &task_id,
            "2026-08-01T09:00:00Z",
            "2026-08-01T10:00:00Z",
            60.0,
            "2026-08-01",
            "",
        )
        .unwrap();
        delete_entry(&mut doc, &entry.entry_id).unwrap();
        assert!(doc.time_entries.is_empty());
        assert_eq!(doc.tasks[0].actual_hours, 1.0);
    }
}
