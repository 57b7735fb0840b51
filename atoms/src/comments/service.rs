use super::model::Comment;
use crate::document::Document;

pub fn append_comment(
    doc: &mut Document,
    task_id: &str,
    author_id: &str,
    content: &str,
    mentions: Vec<String>,
) -> Comment {
    let comment = Comment {
        comment_id: uuid::Uuid::new_v4().to_string(),
        task_id: task_id.to_string(),
        author_id: author_id.to_string(),
        content: content.to_string(),
        mentions,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    doc.comments.push(comment.clone());
    comment
}

pub fn list_for_task(doc: &Document, task_id: &str) -> Vec<Comment> {
    doc.comments
        .iter()
        .filter(|c| c.task_id == task_id)
        .cloned()
        .collect()
}

pub fn delete_comment(doc: &mut Document, comment_id: &str) -> Result<(), String> {
    let idx = doc
        .comments
        .iter()
        .position(|c| c.comment_id == comment_id)
        .ok_or_else(|| "Comment not found".to_string())?;
    doc.comments.remove(idx);
    Ok(())
}
