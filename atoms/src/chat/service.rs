use super::model::{ChatMessage, CreateChatMessagePayload};
use crate::document::Document;

pub fn list_messages(doc: &Document, workspace_id: Option<&str>) -> Vec<ChatMessage> {
    doc.chat_messages
        .iter()
        .filter(|m| workspace_id.map_or(true, |w| m.workspace_id == w))
        .cloned()
        .collect()
}

pub fn post_message(doc: &mut Document, payload: CreateChatMessagePayload) -> ChatMessage {
    let message = ChatMessage {
        message_id: uuid::Uuid::new_v4().to_string(),
        workspace_id: payload.workspace_id,
        sender_id: payload.sender_id,
        sender_name: payload.sender_name,
        content: payload.content,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    doc.chat_messages.push(message.clone());
    message
}

pub fn delete_message(doc: &mut Document, message_id: &str) -> Result<(), String> {
    let idx = doc
        .chat_messages
        .iter()
        .position(|m| m.message_id == message_id)
        .ok_or_else(|| "Message not found".to_string())?;
    doc.chat_messages.remove(idx);
    Ok(())
}
