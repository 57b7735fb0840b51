use lambda_http::{http::StatusCode, Body, Error, Response};

use taskflow_atoms::users::model::{CreateUserPayload, UpdateUserPayload};
use taskflow_atoms::users::service;
use taskflow_atoms::{respond, Document};

pub fn list_users(doc: &Document) -> Result<Response<Body>, Error> {
    respond::ok(StatusCode::OK, &doc.users)
}

pub fn create_user(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: CreateUserPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.user_email.trim().is_empty() {
        return respond::bad_request("user_email is required");
    }
    let user = service::create_user(doc, payload);
    respond::ok(StatusCode::CREATED, &user)
}

/// GET /users/me - the record behind the session cookie.
pub fn get_me(doc: &Document, user_id: &str) -> Result<Response<Body>, Error> {
    match service::get_user(doc, user_id) {
        Ok(user) => respond::ok(StatusCode::OK, &user),
        Err(e) => respond::not_found(&e),
    }
}

/// PATCH /users/me
pub fn update_me(doc: &mut Document, user_id: &str, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: UpdateUserPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    match service::update_user(doc, user_id, payload) {
        Ok(user) => respond::ok(StatusCode::OK, &user),
        Err(e) => respond::not_found(&e),
    }
}
