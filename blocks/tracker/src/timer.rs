use chrono::{DateTime, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use taskflow_atoms::time_entries::model::{ActiveTimer, TimerPayload};
use taskflow_atoms::time_entries::service::record_entry;
use taskflow_atoms::{respond, Document};

/// POST /timer/start - one timer for the whole app; a second start is
/// refused until the first one stops.
pub fn start_timer(
    doc: &mut Document,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    let payload: TimerPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if !doc.tasks.iter().any(|t| t.task_id == payload.task_id) {
        return respond::not_found("Task not found");
    }
    if let Some(active) = &doc.active_timer {
        return respond::bad_request(&format!(
            "A timer is already running for task {}",
            active.task_id
        ));
    }

    let timer = ActiveTimer {
        task_id: payload.task_id,
        started_at: now.to_rfc3339(),
    };
    doc.active_timer = Some(timer.clone());
    respond::ok(StatusCode::CREATED, &timer)
}

/// GET /timer - the active timer with elapsed whole seconds, or null.
/// The client polls this; nothing server-side ticks.
pub fn timer_status(doc: &Document, now: DateTime<Utc>) -> Result<Response<Body>, Error> {
    match &doc.active_timer {
        Some(timer) => {
            let elapsed = elapsed_seconds(&timer.started_at, now);
            respond::ok(
                StatusCode::OK,
                &serde_json::json!({
                    "task_id": timer.task_id,
                    "started_at": timer.started_at,
                    "elapsed_seconds": elapsed,
                }),
            )
        }
        None => respond::ok(StatusCode::OK, &serde_json::Value::Null),
    }
}

/// POST /timer/stop - close the timer, record the interval and grow the
/// task's hours. Always clears the stored timer so a reload cannot
/// resume a phantom; a duplicate stop finds the entry already recorded
/// and inserts nothing new.
pub fn stop_timer(
    doc: &mut Document,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    let payload: TimerPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };

    let timer = match &doc.active_timer {
        Some(t) => t.clone(),
        None => return respond::bad_request("No timer is running"),
    };
    if timer.task_id != payload.task_id {
        return respond::bad_request(&format!(
            "The running timer belongs to task {}",
            timer.task_id
        ));
    }

    doc.active_timer = None;

    let seconds = elapsed_seconds(&timer.started_at, now);
    let duration_minutes = seconds as f64 / 60.0;
    let date = timer
        .started_at
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();

    match record_entry(
        doc,
        &payload.task_id,
        &timer.started_at,
        &now.to_rfc3339(),
        duration_minutes,
        &date,
        "",
    ) {
        Ok(entry) => respond::ok(StatusCode::CREATED, &entry),
        Err(e) => respond::not_found(&e),
    }
}

fn elapsed_seconds(started_at: &str, now: DateTime<Utc>) -> i64 {
    DateTime::parse_from_rfc3339(started_at)
        .map(|start| ((now.timestamp_millis() - start.timestamp_millis()) / 1000).max(0))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use taskflow_atoms::tasks::model::CreateTaskPayload;
    use taskflow_atoms::tasks::service::create_task;

    fn at(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, 9, minute, second).unwrap()
    }

    fn seed_task(doc: &mut Document) -> String {
        create_task(
            doc,
            CreateTaskPayload {
                task_title: "Timed".to_string(),
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

    fn body(task_id: &str) -> Vec<u8> {
        serde_json::json!({ "task_id": task_id }).to_string().into_bytes()
    }

    #[test]
    fn start_refuses_second_timer() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);
        let other = seed_task(&mut doc);

        let resp = start_timer(&mut doc, &body(&task_id), at(0, 0)).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let resp = start_timer(&mut doc, &body(&other), at(1, 0)).unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn stop_records_entry_and_hours() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);

        start_timer(&mut doc, &body(&task_id), at(0, 0)).unwrap();
        // 90 seconds of work
        let resp = stop_timer(&mut doc, &body(&task_id), at(1, 30)).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        assert!(doc.active_timer.is_none());
        assert_eq!(doc.time_entries.len(), 1);
        assert_eq!(doc.time_entries[0].duration_minutes, 1.5);
        assert!((doc.tasks[0].actual_hours - 0.025).abs() < 1e-9);
    }

    #[test]
    fn double_stop_keeps_one_entry() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);

        start_timer(&mut doc, &body(&task_id), at(0, 0)).unwrap();
        stop_timer(&mut doc, &body(&task_id), at(1, 30)).unwrap();

        // a stale client fires stop again; the timer is gone by now
        let resp = stop_timer(&mut doc, &body(&task_id), at(1, 31)).unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(doc.time_entries.len(), 1);
        assert!((doc.tasks[0].actual_hours - 0.025).abs() < 1e-9);
    }

    #[test]
    fn status_reports_elapsed_seconds() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc);
        start_timer(&mut doc, &body(&task_id), at(0, 0)).unwrap();

        let resp = timer_status(&doc, at(2, 5)).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(parsed["data"]["elapsed_seconds"], 125);
    }
}
