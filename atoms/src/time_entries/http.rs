use chrono::DateTime;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::CreateTimeEntryPayload;
use super::service;
use crate::document::Document;
use crate::respond;

pub fn list_entries(
    doc: &Document,
    task_id: Option<&str>,
    date: Option<&str>,
) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &service::list_entries(doc, task_id, date))
}

/// Manual entry creation. Goes through the same recording path as the
/// timer stop, so the duplicate guard and hours accrual apply here too.
pub fn create_entry(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateTimeEntryPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };

    let duration_minutes = match payload.duration_minutes {
        Some(d) => d,
        None => {
            let start = match DateTime::parse_from_rfc3339(&payload.start_time) {
                Ok(t) => t,
                Err(e) => return respond::bad_request(&format!("Invalid start_time: {}", e)),
            };
            let end = match DateTime::parse_from_rfc3339(&payload.end_time) {
                Ok(t) => t,
                Err(e) => return respond::bad_request(&format!("Invalid end_time: {}", e)),
            };
            let seconds = (end - start).num_seconds();
            if seconds < 0 {
                return respond::bad_request("end_time precedes start_time");
            }
            seconds as f64 / 60.0
        }
    };

    let date = match payload.date {
        Some(d) => d,
        None => payload
            .start_time
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    match service::record_entry(
        doc,
        &payload.task_id,
        &payload.start_time,
        &payload.end_time,
        duration_minutes,
        &date,
        payload.description.as_deref().unwrap_or(""),
    ) {
        Ok(entry) => respond::ok(StatusCode::CREATED, &entry),
        Err(e) => respond::not_found(&e),
    }
}

pub fn delete_entry(doc: &mut Document, entry_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_entry(doc, entry_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": entry_id })),
        Err(e) => respond::not_found(&e),
    }
}
