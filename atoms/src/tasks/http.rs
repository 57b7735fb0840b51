use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{CreateTaskPayload, UpdateTaskPayload};
use super::service;
use crate::document::Document;
use crate::respond;

/// List tasks, narrowed by the query string filters the UI sends.
pub fn list_tasks(
    doc: &Document,
    project_id: Option<&str>,
    workspace_id: Option<&str>,
    task_state: Option<&str>,
) -> Result<Response<Body>, Error> {
    let tasks = service::list_tasks(doc, project_id, workspace_id, task_state);
    respond::ok(StatusCode::OK, &tasks)
}

pub fn create_task(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateTaskPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.task_title.trim().is_empty() {
        return respond::bad_request("task_title is required");
    }
    let task = service::create_task(doc, payload);
    respond::ok(StatusCode::CREATED, &task)
}

pub fn get_task(doc: &Document, task_id: &str) -> Result<Response<Body>, Error> {
    match service::get_task(doc, task_id) {
        Ok(task) => respond::ok(StatusCode::OK, &task),
        Err(e) => respond::not_found(&e),
    }
}

pub fn update_task(
    doc: &mut Document,
    task_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: UpdateTaskPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    match service::update_task(doc, task_id, payload) {
        Ok(task) => respond::ok(StatusCode::OK, &task),
        Err(e) => respond::not_found(&e),
    }
}

pub fn delete_task(doc: &mut Document, task_id: &str) -> Result<Response<Body>, Error> {
    match service::delete_task(doc, task_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": task_id })),
        Err(e) => respond::not_found(&e),
    }
}
