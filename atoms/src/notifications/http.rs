use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::ReadAllPayload;
use super::service;
use crate::document::Document;
use crate::respond;

pub fn list_notifications(
    doc: &Document,
    user_id: Option<&str>,
    unread_only: bool,
) -> Result<Response<Body>, Error> {
    let user_id = match user_id {
        Some(u) => u,
        None => return respond::bad_request("user_id query parameter is required"),
    };
    respond::ok(
        StatusCode::OK,
        &service::list_for_user(doc, user_id, unread_only),
    )
}

pub fn mark_read(doc: &mut Document, notification_id: &str) -> Result<Response<Body>, Error> {
    match service::mark_read(doc, notification_id) {
        Ok(n) => respond::ok(StatusCode::OK, &n),
        Err(e) => respond::not_found(&e),
    }
}

pub fn mark_all_read(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: ReadAllPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    let flipped = service::mark_all_read(doc, &payload.user_id);
    respond::ok(StatusCode::OK, &serde_json::json!({ "marked_read": flipped }))
}

pub fn delete_notification(
    doc: &mut Document,
    notification_id: &str,
) -> Result<Response<Body>, Error> {
    match service::delete_notification(doc, notification_id) {
        Ok(()) => respond::ok(
            StatusCode::OK,
            &serde_json::json!({ "deleted": notification_id }),
        ),
        Err(e) => respond::not_found(&e),
    }
}
