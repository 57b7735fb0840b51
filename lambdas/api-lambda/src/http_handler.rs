use std::sync::Arc;

use chrono::Utc;
use lambda_http::http::header::{HeaderValue, VARY};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use taskflow_atoms as atoms;
use taskflow_atoms::respond;
use taskflow_shared::{auth, online, users, AppState};
use tracker_block::{attendance, comments, roadmap, timer};

fn with_cors_headers(mut resp: Response<Body>, request_origin: Option<&str>) -> Response<Body> {
    let cors_origin = request_origin.unwrap_or("*");

    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_str(cors_origin).unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        "Access-Control-Allow-Credentials",
        HeaderValue::from_static("true"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,Cookie"),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));

    resp
}

fn finalize_response(
    resp: Result<Response<Body>, Error>,
    request_origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    // Any error that escaped a handler becomes a 500 carrying its message.
    let resp = resp.or_else(|e| {
        tracing::error!("Handler failed: {}", e);
        let message = e.to_string();
        let message = if message.is_empty() {
            "Internal server error".to_string()
        } else {
            message
        };
        respond::error(StatusCode::INTERNAL_SERVER_ERROR, &message)
    });
    resp.map(|r| with_cors_headers(r, request_origin))
}

/// Main Lambda handler - loads the whole document, routes the request to
/// one collection handler, then writes the document back. No locking;
/// two concurrent writers race and the later write wins.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path().to_string();
    let body = event.body();
    let request_origin = event.headers().get("Origin").and_then(|v| v.to_str().ok());
    let cookie_header = event.headers().get("Cookie").and_then(|v| v.to_str().ok());
    tracing::info!("🚀 API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp, request_origin));
    }

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut doc = state.store.load();
    // GET /roadmap can regenerate the dataset, which must be persisted
    // even though the verb is a read.
    let mut regenerated = false;

    let resp = match (method, parts.as_slice()) {
        // --- AUTH ---
        // POST /auth/login - find-or-create user, set session cookie
        (&Method::POST, ["auth", "login"]) => auth::login(&mut doc, body),
        // POST /auth/logout - clear session cookie
        (&Method::POST, ["auth", "logout"]) => auth::logout(),
        // GET /auth/session - echo session claims
        (&Method::GET, ["auth", "session"]) => auth::session(cookie_header),

        // --- USERS ---
        // GET /users - list users
        (&Method::GET, ["users"]) => users::list_users(&doc),
        // POST /users - create user
        (&Method::POST, ["users"]) => users::create_user(&mut doc, body),
        // GET /users/me - current user (cookie auth)
        (&Method::GET, ["users", "me"]) => {
            match auth::authenticate_cookie_request(cookie_header, Utc::now()) {
                Ok(session) => users::get_me(&doc, &session.user_id),
                Err(resp) => Ok(resp),
            }
        }
        // PATCH /users/me - update current user (cookie auth)
        (&Method::PATCH, ["users", "me"]) => {
            match auth::authenticate_cookie_request(cookie_header, Utc::now()) {
                Ok(session) => users::update_me(&mut doc, &session.user_id, body),
                Err(resp) => Ok(resp),
            }
        }

        // --- WORKSPACES ---
        // GET /workspaces - list (optionally for one member)
        (&Method::GET, ["workspaces"]) => {
            atoms::workspaces::http::list_workspaces(&doc, event.query_string_parameters_ref().and_then(|p| p.first("user_id")))
        }
        // POST /workspaces - create workspace
        (&Method::POST, ["workspaces"]) => atoms::workspaces::http::create_workspace(&mut doc, body),
        // GET /workspaces/{id}
        (&Method::GET, ["workspaces", workspace_id]) => {
            atoms::workspaces::http::get_workspace(&doc, workspace_id)
        }
        // PATCH /workspaces/{id}
        (&Method::PATCH, ["workspaces", workspace_id]) => {
            atoms::workspaces::http::update_workspace(&mut doc, workspace_id, body)
        }
        // DELETE /workspaces/{id} - cascades to projects and tasks
        (&Method::DELETE, ["workspaces", workspace_id]) => {
            atoms::workspaces::http::delete_workspace(&mut doc, workspace_id)
        }

        // --- PROJECTS ---
        // GET /projects?workspace_id=
        (&Method::GET, ["projects"]) => {
            atoms::projects::http::list_projects(&doc, event.query_string_parameters_ref().and_then(|p| p.first("workspace_id")))
        }
        // POST /projects - create project
        (&Method::POST, ["projects"]) => atoms::projects::http::create_project(&mut doc, body),
        // GET /projects/{id}
        (&Method::GET, ["projects", project_id]) => {
            atoms::projects::http::get_project(&doc, project_id)
        }
        // PATCH /projects/{id}
        (&Method::PATCH, ["projects", project_id]) => {
            atoms::projects::http::update_project(&mut doc, project_id, body)
        }
        // DELETE /projects/{id} - cascades to the project's tasks
        (&Method::DELETE, ["projects", project_id]) => {
            atoms::projects::http::delete_project(&mut doc, project_id)
        }

        // --- TASKS ---
        // GET /tasks?project_id=&workspace_id=&state=
        (&Method::GET, ["tasks"]) => {
            let params = event.query_string_parameters_ref();
            atoms::tasks::http::list_tasks(
                &doc,
                params.and_then(|p| p.first("project_id")),
                params.and_then(|p| p.first("workspace_id")),
                params.and_then(|p| p.first("state")),
            )
        }
        // POST /tasks - create task
        (&Method::POST, ["tasks"]) => atoms::tasks::http::create_task(&mut doc, body),
        // GET /tasks/{id}
        (&Method::GET, ["tasks", task_id]) => atoms::tasks::http::get_task(&doc, task_id),
        // PATCH /tasks/{id}
        (&Method::PATCH, ["tasks", task_id]) => {
            atoms::tasks::http::update_task(&mut doc, task_id, body)
        }
        // DELETE /tasks/{id}
        (&Method::DELETE, ["tasks", task_id]) => {
            atoms::tasks::http::delete_task(&mut doc, task_id)
        }

        // GET /tasks/{id}/activity - the task's activity log
        (&Method::GET, ["tasks", task_id, "activity"]) => respond::ok(
            StatusCode::OK,
            &atoms::activity::service::list_for_task(&doc, task_id),
        ),

        // --- COMMENTS ---
        // GET /tasks/{id}/comments
        (&Method::GET, ["tasks", task_id, "comments"]) => comments::list_comments(&doc, task_id),
        // POST /tasks/{id}/comments - cookie auth, fans out notifications
        (&Method::POST, ["tasks", task_id, "comments"]) => {
            match auth::authenticate_cookie_request(cookie_header, Utc::now()) {
                Ok(session) => comments::create_comment(
                    &mut doc,
                    task_id,
                    &session.user_id,
                    &session.name,
                    body,
                ),
                Err(resp) => Ok(resp),
            }
        }
        // DELETE /comments/{id}
        (&Method::DELETE, ["comments", comment_id]) => {
            comments::delete_comment(&mut doc, comment_id)
        }

        // --- TIME ENTRIES ---
        // GET /time-entries?task_id=&date=
        (&Method::GET, ["time-entries"]) => {
            let params = event.query_string_parameters_ref();
            atoms::time_entries::http::list_entries(
                &doc,
                params.and_then(|p| p.first("task_id")),
                params.and_then(|p| p.first("date")),
            )
        }
        // POST /time-entries - manual entry, same recording path as the timer
        (&Method::POST, ["time-entries"]) => {
            atoms::time_entries::http::create_entry(&mut doc, body)
        }
        // DELETE /time-entries/{id}
        (&Method::DELETE, ["time-entries", entry_id]) => {
            atoms::time_entries::http::delete_entry(&mut doc, entry_id)
        }

        // --- TIMER ---
        // GET /timer - active timer with elapsed seconds
        (&Method::GET, ["timer"]) => timer::timer_status(&doc, Utc::now()),
        // POST /timer/start
        (&Method::POST, ["timer", "start"]) => timer::start_timer(&mut doc, body, Utc::now()),
        // POST /timer/stop - records a time entry, grows task hours
        (&Method::POST, ["timer", "stop"]) => timer::stop_timer(&mut doc, body, Utc::now()),

        // --- ATTENDANCE ---
        // GET /attendance?user_id=&date=
        (&Method::GET, ["attendance"]) => {
            let params = event.query_string_parameters_ref();
            attendance::list_records(
                &doc,
                params.and_then(|p| p.first("user_id")),
                params.and_then(|p| p.first("date")),
            )
        }
        // POST /attendance/clock-in
        (&Method::POST, ["attendance", "clock-in"]) => {
            attendance::clock_in(&mut doc, body, Utc::now())
        }
        // POST /attendance/clock-out - derives work hours and status
        (&Method::POST, ["attendance", "clock-out"]) => {
            attendance::clock_out(&mut doc, body, Utc::now())
        }
        // POST /attendance/cleanup - drop invalid and duplicate records
        (&Method::POST, ["attendance", "cleanup"]) => attendance::cleanup(&mut doc),
        // PATCH /attendance/{id}
        (&Method::PATCH, ["attendance", record_id]) => {
            attendance::update_record(&mut doc, record_id, body)
        }

        // --- NOTIFICATIONS ---
        // GET /notifications?user_id=&unread=true
        (&Method::GET, ["notifications"]) => atoms::notifications::http::list_notifications(
            &doc,
            event.query_string_parameters_ref().and_then(|p| p.first("user_id")),
            event.query_string_parameters_ref().and_then(|p| p.first("unread")) == Some("true"),
        ),
        // PATCH /notifications/{id}/read
        (&Method::PATCH, ["notifications", notification_id, "read"]) => {
            atoms::notifications::http::mark_read(&mut doc, notification_id)
        }
        // POST /notifications/read-all
        (&Method::POST, ["notifications", "read-all"]) => {
            atoms::notifications::http::mark_all_read(&mut doc, body)
        }
        // DELETE /notifications/{id}
        (&Method::DELETE, ["notifications", notification_id]) => {
            atoms::notifications::http::delete_notification(&mut doc, notification_id)
        }

        // --- CHAT ---
        // GET /chat?workspace_id=
        (&Method::GET, ["chat"]) => atoms::chat::http::list_messages(
            &doc,
            event.query_string_parameters_ref().and_then(|p| p.first("workspace_id")),
        ),
        // POST /chat - post message
        (&Method::POST, ["chat"]) => atoms::chat::http::post_message(&mut doc, body),
        // DELETE /chat/{id}
        (&Method::DELETE, ["chat", message_id]) => {
            atoms::chat::http::delete_message(&mut doc, message_id)
        }

        // --- ONLINE STATUS ---
        // GET /online-status - all users with freshness verdict
        (&Method::GET, ["online-status"]) => online::list_statuses(&doc, Utc::now()),
        // POST /online-status - heartbeat
        (&Method::POST, ["online-status"]) => online::heartbeat(&mut doc, body, Utc::now()),

        // --- ROADMAP ---
        // GET /roadmap - phases and counts, regenerating when incomplete
        (&Method::GET, ["roadmap"]) => {
            regenerated = roadmap::ensure_dataset(&mut doc);
            roadmap::get_roadmap(&doc)
        }
        // GET /roadmap/tasks?phase_id=&week_id=
        (&Method::GET, ["roadmap", "tasks"]) => {
            regenerated = roadmap::ensure_dataset(&mut doc);
            let params = event.query_string_parameters_ref();
            roadmap::list_roadmap_tasks(
                &doc,
                params.and_then(|p| p.first("phase_id")),
                params.and_then(|p| p.first("week_id")),
            )
        }

        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            respond::not_found("Not found")
        }
    };

    // Write the whole document back after anything that can mutate it.
    let mutating = matches!(*method, Method::POST | Method::PATCH | Method::DELETE);
    if mutating || regenerated {
        if let Err(e) = state.store.save(&doc) {
            tracing::error!("Failed to persist document: {}", e);
            return finalize_response(
                respond::error(StatusCode::INTERNAL_SERVER_ERROR, &e),
                request_origin,
            );
        }
    }

    finalize_response(resp, request_origin)
}
