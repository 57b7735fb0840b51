use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

/// Every endpoint answers with the same envelope:
/// `{ "success": true, "data": ... }` or `{ "success": false, "error": "..." }`.
pub fn ok<T: Serialize>(status: StatusCode, data: &T) -> Result<Response<Body>, Error> {
    let payload = serde_json::json!({ "success": true, "data": data });
    build(status, payload.to_string())
}

pub fn error(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    let payload = serde_json::json!({ "success": false, "error": message });
    build(status, payload.to_string())
}

pub fn not_found(message: &str) -> Result<Response<Body>, Error> {
    error(StatusCode::NOT_FOUND, message)
}

pub fn bad_request(message: &str) -> Result<Response<Body>, Error> {
    error(StatusCode::BAD_REQUEST, message)
}

fn build(status: StatusCode, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.into())
        .map_err(Box::new)?)
}
