use chrono::{DateTime, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use taskflow_atoms::attendance::model::{ClockPayload, UpdateAttendancePayload};
use taskflow_atoms::attendance::service;
use taskflow_atoms::{respond, Document};

fn payload_date(payload: &ClockPayload, now: DateTime<Utc>) -> String {
    payload
        .date
        .clone()
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string())
}

/// POST /attendance/clock-in
pub fn clock_in(
    doc: &mut Document,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    let payload: ClockPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    let date = payload_date(&payload, now);
    match service::clock_in(doc, &payload.user_id, &date, now) {
        Ok(record) => respond::ok(StatusCode::CREATED, &record),
        Err(e) => respond::bad_request(&e),
    }
}

/// POST /attendance/clock-out
pub fn clock_out(
    doc: &mut Document,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    let payload: ClockPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    let date = payload_date(&payload, now);
    match service::clock_out(doc, &payload.user_id, &date, now) {
        Ok(record) => respond::ok(StatusCode::OK, &record),
        Err(e) => respond::bad_request(&e),
    }
}

/// GET /attendance?user_id=&date=
pub fn list_records(
    doc: &Document,
    user_id: Option<&str>,
    date: Option<&str>,
) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &service::list_records(doc, user_id, date))
}

/// PATCH /attendance/{id}
pub fn update_record(
    doc: &mut Document,
    record_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: UpdateAttendancePayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    match service::update_record(doc, record_id, payload) {
        Ok(record) => respond::ok(StatusCode::OK, &record),
        Err(e) => respond::not_found(&e),
    }
}

/// POST /attendance/cleanup - manual data-integrity pass.
pub fn cleanup(doc: &mut Document) -> Result<Response<Body>, Error> {
    let summary = service::cleanup(doc);
    tracing::info!(
        "Attendance cleanup removed {} records, {} remain",
        summary.removed,
        summary.remaining
    );
    respond::ok(StatusCode::OK, &summary)
}
