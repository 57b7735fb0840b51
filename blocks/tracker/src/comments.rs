use lambda_http::{http::StatusCode, Body, Error, Response};

use taskflow_atoms::activity;
use taskflow_atoms::comments::model::CreateCommentPayload;
use taskflow_atoms::comments::service as comments;
use taskflow_atoms::notifications::service::push_notification;
use taskflow_atoms::{respond, Document};

/// POST /tasks/{id}/comments - append the comment, log the activity and
/// fan notifications out to mentioned users and remaining assignees.
///
/// Ids are compared verbatim: a mention that differs from an assignee id
/// only in casing produces two notifications.
pub fn create_comment(
    doc: &mut Document,
    task_id: &str,
    author_id: &str,
    author_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreateCommentPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };
    if payload.content.trim().is_empty() {
        return respond::bad_request("content is required");
    }

    let task = match doc.tasks.iter().find(|t| t.task_id == task_id) {
        Some(t) => t.clone(),
        None => return respond::not_found("Task not found"),
    };

    let mentions = payload.mentions.unwrap_or_default();
    let comment = comments::append_comment(doc, task_id, author_id, &payload.content, mentions.clone());
    activity::service::record(doc, task_id, author_id, "commented");

    let link = format!("/tasks/{}", task_id);
    for mentioned in &mentions {
        if mentioned == author_id {
            continue;
        }
        push_notification(
            doc,
            mentioned,
            "mention",
            &format!("{} mentioned you in a comment on \"{}\"", author_name, task.task_title),
            Some(link.clone()),
        );
    }
    for assignee in &task.assignees {
        if assignee == author_id || mentions.contains(assignee) {
            continue;
        }
        push_notification(
            doc,
            assignee,
            "comment",
            &format!("{} commented on \"{}\"", author_name, task.task_title),
            Some(link.clone()),
        );
    }

    respond::ok(StatusCode::CREATED, &comment)
}

/// GET /tasks/{id}/comments
pub fn list_comments(doc: &Document, task_id: &str) -> Result<Response<Body>, Error> {
    if !doc.tasks.iter().any(|t| t.task_id == task_id) {
        return respond::not_found("Task not found");
    }
    respond::ok(StatusCode::OK, &comments::list_for_task(doc, task_id))
}

/// DELETE /comments/{id}
pub fn delete_comment(doc: &mut Document, comment_id: &str) -> Result<Response<Body>, Error> {
    match comments::delete_comment(doc, comment_id) {
        Ok(()) => respond::ok(StatusCode::OK, &serde_json::json!({ "deleted": comment_id })),
        Err(e) => respond::not_found(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_atoms::tasks::model::CreateTaskPayload;
    use taskflow_atoms::tasks::service::create_task;

    fn seed_task(doc: &mut Document, assignees: Vec<String>) -> String {
        create_task(
            doc,
            CreateTaskPayload {
                task_title: "Discussed".to_string(),
                task_description: None,
                project_id: None,
                workspace_id: None,
                task_state: None,
                priority: None,
                assignees: Some(assignees),
                tags: None,
                dependencies: None,
                estimated_hours: None,
                phase_id: None,
                month_id: None,
                week_id: None,
            },
        )
        .task_id
    }

    fn body(content: &str, mentions: &[&str]) -> Vec<u8> {
        serde_json::json!({ "content": content, "mentions": mentions })
            .to_string()
            .into_bytes()
    }

    #[test]
    fn fan_out_covers_mentions_and_assignees_once() {
        let mut doc = Document::default();
        // author u1; u2 mentioned and assigned; u3 assigned only
        let task_id = seed_task(&mut doc, vec!["u2".to_string(), "u3".to_string()]);

        let resp =
            create_comment(&mut doc, &task_id, "u1", "Ana", &body("looks good @u2", &["u2"]))
                .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        assert_eq!(doc.comments.len(), 1);
        assert_eq!(doc.activity.len(), 1);
        assert_eq!(doc.notifications.len(), 2);

        let kinds: Vec<(&str, &str)> = doc
            .notifications
            .iter()
            .map(|n| (n.user_id.as_str(), n.kind.as_str()))
            .collect();
        assert!(kinds.contains(&("u2", "mention")));
        assert!(kinds.contains(&("u3", "comment")));
    }

    #[test]
    fn author_never_notified() {
        let mut doc = Document::default();
        let task_id = seed_task(&mut doc, vec!["u1".to_string()]);

        create_comment(&mut doc, &task_id, "u1", "Ana", &body("note to self @u1", &["u1"]))
            .unwrap();
        assert!(doc.notifications.is_empty());
    }

    #[test]
    fn unknown_task_is_404_and_appends_nothing() {
        let mut doc = Document::default();
        let resp = create_comment(&mut doc, "missing", "u1", "Ana", &body("hi", &[])).unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(doc.comments.is_empty());
        assert!(doc.activity.is_empty());
    }
}
