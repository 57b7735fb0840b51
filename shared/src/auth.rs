use chrono::{DateTime, Duration, Utc};
use lambda_http::http::header::SET_COOKIE;
use lambda_http::http::HeaderValue;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::{Deserialize, Serialize};

use taskflow_atoms::users::service::find_or_create_user;
use taskflow_atoms::{respond, Document};

pub const SESSION_COOKIE: &str = "session";
const SESSION_DAYS: i64 = 7;

/// The session claims, carried verbatim as a percent-encoded JSON
/// cookie value. Unsigned and unencrypted; whatever the client sends
/// back is trusted as-is.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub expires_at: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub name: Option<String>,
}

/// Pull the session out of the Cookie header. Absent, unparseable or
/// expired sessions all come back as a ready-made 401 response.
pub fn authenticate_cookie_request(
    cookie_header: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Session, Response<Body>> {
    let raw = cookie_header
        .and_then(|h| cookie_value(h, SESSION_COOKIE))
        .ok_or_else(|| unauthorized("Missing session cookie"))?;

    let decoded = urlencoding::decode(&raw)
        .map_err(|_| unauthorized("Malformed session cookie"))?;
    let session: Session = serde_json::from_str(&decoded)
        .map_err(|_| unauthorized("Malformed session cookie"))?;

    let expires_at = DateTime::parse_from_rfc3339(&session.expires_at)
        .map_err(|_| unauthorized("Malformed session cookie"))?;
    if expires_at.timestamp() < now.timestamp() {
        return Err(unauthorized("Session expired"));
    }
    Ok(session)
}

fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

fn unauthorized(message: &str) -> Response<Body> {
    respond::error(StatusCode::UNAUTHORIZED, message)
        .unwrap_or_else(|_| Response::new(Body::Empty))
}

pub fn build_session_cookie(session: &Session) -> String {
    let json = serde_json::to_string(session).unwrap_or_default();
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE,
        urlencoding::encode(&json),
        SESSION_DAYS * 24 * 60 * 60
    )
}

pub fn clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
}

/// POST /auth/login - find-or-create the user and set the session cookie.
pub fn login(doc: &mut Document, body: &[u8]) -> Result<Response<Body>, Error> {
    let payload: LoginPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.email.trim().is_empty() {
        return respond::bad_request("email is required");
    }

    let user = find_or_create_user(doc, payload.email.trim(), payload.name.as_deref());
    let session = Session {
        user_id: user.user_id.clone(),
        email: user.user_email.clone(),
        name: user.user_name.clone(),
        expires_at: (Utc::now() + Duration::days(SESSION_DAYS)).to_rfc3339(),
    };

    let mut resp = respond::ok(StatusCode::OK, &user)?;
    if let Ok(v) = HeaderValue::from_str(&build_session_cookie(&session)) {
        resp.headers_mut().append(SET_COOKIE, v);
    }
    Ok(resp)
}

/// POST /auth/logout - clear the cookie; nothing server-side to revoke.
pub fn logout() -> Result<Response<Body>, Error> {
    let mut resp = respond::ok(StatusCode::OK, &serde_json::json!({ "message": "ok" }))?;
    if let Ok(v) = HeaderValue::from_str(&clear_cookie(SESSION_COOKIE)) {
        resp.headers_mut().append(SET_COOKIE, v);
    }
    Ok(resp)
}

/// GET /auth/session - echo the claims back if the cookie still parses.
pub fn session(cookie_header: Option<&str>) -> Result<Response<Body>, Error> {
    match authenticate_cookie_request(cookie_header, Utc::now()) {
        Ok(session) => respond::ok(StatusCode::OK, &session),
        Err(resp) => Ok(resp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(expires_at: &str) -> Session {
        Session {
            user_id: "u1".to_string(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            expires_at: expires_at.to_string(),
        }
    }

    #[test]
    fn cookie_round_trips_through_header() {
        let session = session_at("2030-01-01T00:00:00+00:00");
        let cookie = build_session_cookie(&session);
        let header = cookie.split(';').next().unwrap().to_string();

        let parsed = authenticate_cookie_request(Some(&header), Utc::now()).unwrap();
        assert_eq!(parsed.user_id, "u1");
        assert_eq!(parsed.email, "ana@example.com");
    }

    #[test]
    fn expired_session_rejected() {
        let session = session_at("2020-01-01T00:00:00+00:00");
        let cookie = build_session_cookie(&session);
        let header = cookie.split(';').next().unwrap().to_string();

        let err = authenticate_cookie_request(Some(&header), Utc::now()).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn missing_cookie_rejected() {
        let err = authenticate_cookie_request(None, Utc::now()).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
