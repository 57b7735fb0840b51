use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{CreateWorkspacePayload, UpdateWorkspacePayload};
use super::service;
use crate::document::Document;
use crate::respond;

pub fn list_workspaces(doc: &Document, user_id: Option<&str>) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &service::list_workspaces(doc, user_id))
}

pub fn create_workspace(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateWorkspacePayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.workspace_name.trim().is_empty() {
        return respond::bad_request("workspace_name is required");
    }
    let workspace = service::create_workspace(doc, payload);
    respond::ok(StatusCode::CREATED, &workspace)
}

pub fn get_workspace(doc: &Document, workspace_id: &str) -> Result<Response<Body>, Error> {
    match service::get_workspace(doc, workspace_id) {
        Ok(ws) => respond::ok(StatusCode::OK, &ws),
        Err(e) => respond::not_found(&e),
    }
}

pub fn update_workspace(
    doc: &mut Document,
    workspace_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: UpdateWorkspacePayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    match service::update_workspace(doc, workspace_id, payload) {
        Ok(ws) => respond::ok(StatusCode::OK, &ws),
        Err(e) => respond::not_found(&e),
    }
}

pub fn delete_workspace(doc: &mut Document, workspace_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_workspace(doc, workspace_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": workspace_id })),
        Err(e) => respond::not_found(&e),
    }
}
