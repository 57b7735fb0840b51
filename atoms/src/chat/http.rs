use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::CreateChatMessagePayload;
use super::service;
use crate::document::Document;
use crate::respond;

pub fn list_messages(
    doc: &Document,
    workspace_id: Option<&str>,
) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &service::list_messages(doc, workspace_id))
}

pub fn post_message(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateChatMessagePayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.content.trim().is_empty() {
        return respond::bad_request("content is required");
    }
    let message = service::post_message(doc, payload);
    respond::ok(StatusCode::CREATED, &message)
}

pub fn delete_message(doc: &mut Document, message_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_message(doc, message_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": message_id })),
        Err(e) => respond::not_found(&e),
    }
}
