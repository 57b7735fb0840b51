use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{CreateProjectPayload, UpdateProjectPayload};
use super::service;
use crate::document::Document;
use crate::respond;

pub fn list_projects(doc: &Document, workspace_id: Option<&str>) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &service::list_projects(doc, workspace_id))
}

pub fn create_project(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateProjectPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.project_name.trim().is_empty() {
        return respond::bad_request("project_name is required");
    }
    match service::create_project(doc, payload) {
        Ok(project) => respond::ok(StatusCode::CREATED, &project),
        Err(e) => respond::not_found(&e),
    }
}

pub fn get_project(doc: &Document, project_id: &str) -> Result<Response<Body>, Error> {
    match service::get_project(doc, project_id) {
        Ok(project) => respond::ok(StatusCode::OK, &project),
        Err(e) => respond::not_found(&e),
    }
}

pub fn update_project(
    doc: &mut Document,
    project_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: UpdateProjectPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    match service::update_project(doc, project_id, payload) {
        Ok(project) => respond::ok(StatusCode::OK, &project),
        Err(e) => respond::not_found(&e),
    }
}

pub fn delete_project(doc: &mut Document, project_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_project(doc, project_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": project_id })),
        Err(e) => respond::not_found(&e),
    }
}
