use super::model::Notification;
use crate::document::Document;

pub fn push_notification(
    doc: &mut Document,
    user_id: &str,
    kind: &str,
    message: &str,
    link: Option<String>,
) -> Notification {
    let notification = Notification {
        notification_id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        kind: kind.to_string(),
        message: message.to_string(),
        link,
        read: false,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    doc.notifications.push(notification.clone());
    notification
}

pub fn list_for_user(doc: &Document, user_id: &str, unread_only: bool) -> Vec<Notification> {
    doc.notifications
        .iter()
        .filter(|n| n.user_id == user_id)
        .filter(|n| !unread_only || !n.read)
        .cloned()
        .collect()
}

pub fn mark_read(doc: &mut Document, notification_id: &str) -> Result<Notification, String> {
    let notification = doc
        .notifications
        .iter_mut()
        .find(|n| n.notification_id == notification_id)
        .ok_or_else(|| "Notification not found".to_string())?;
    notification.read = true;
    Ok(notification.clone())
}

/// Returns how many notifications flipped to read.
pub fn mark_all_read(doc: &mut Document, user_id: &str) -> usize {
    let mut flipped = 0;
    for notification in doc
        .notifications
        .iter_mut()
        .filter(|n| n.user_id == user_id && !n.read)
    {
        notification.read = true;
        flipped += 1;
    }
    flipped
}

pub fn delete_notification(doc: &mut Document, notification_id: &str) -> Result<(), String> {
    let idx = doc
        .notifications
        .iter()
        .position(|n| n.notification_id == notification_id)
        .ok_or_else(|| "Notification not found".to_string())?;
    doc.notifications.remove(idx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_all_read_only_touches_one_user() {
        let mut doc = Document::default();
        push_notification(&mut doc, "u1", "mention", "a", None);
        push_notification(&mut doc, "u1", "mention", "b", None);
        push_notification(&mut doc, "u2", "mention", "c", None);

        let flipped = mark_all_read(&mut doc, "u1");
        assert_eq!(flipped, 2);
        assert!(list_for_user(&doc, "u1", true).is_empty());
        assert_eq!(list_for_user(&doc, "u2", true).len(), 1);
    }
}
