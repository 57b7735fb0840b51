use super::model::{CreateUserPayload, UpdateUserPayload, User};
use crate::document::Document;

/// Look a user up by email, creating the record on first login.
/// A blank name falls back to the mailbox part of the email.
pub fn find_or_create_user(doc: &mut Document, email: &str, name: Option<&str>) -> User {
    if let Some(user) = doc.users.iter_mut().find(|u| u.user_email == email) {
        user.user_last_login = Some(chrono::Utc::now().to_rfc3339());
        if let Some(name) = name {
            if !name.trim().is_empty() {
                user.user_name = name.to_string();
            }
        }
        return user.clone();
    }

    let mut user_name = name.unwrap_or_default().trim().to_string();
    if user_name.is_empty() {
        user_name = email.split('@').next().unwrap_or("User").to_string();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let user = User {
        user_id: uuid::Uuid::new_v4().to_string(),
        user_name,
        user_email: email.to_string(),
        user_role: "member".to_string(),
        user_created_at: now.clone(),
        user_last_login: Some(now),
    };
    doc.users.push(user.clone());
    user
}

pub fn create_user(doc: &mut Document, payload: CreateUserPayload) -> User {
    let user = User {
        user_id: uuid::Uuid::new_v4().to_string(),
        user_name: payload.user_name,
        user_email: payload.user_email,
        user_role: payload.user_role.unwrap_or_else(|| "member".to_string()),
        user_created_at: chrono::Utc::now().to_rfc3339(),
        user_last_login: None,
    };
    doc.users.push(user.clone());
    user
}

pub fn get_user(doc: &Document, user_id: &str) -> Result<User, String> {
    doc.users
        .iter()
        .find(|u| u.user_id == user_id)
        .cloned()
        .ok_or_else(|| "User not found".to_string())
}

pub fn update_user(
    doc: &mut Document,
    user_id: &str,
    payload: UpdateUserPayload,
) -> Result<User, String> {
    let user = doc
        .users
        .iter_mut()
        .find(|u| u.user_id == user_id)
        .ok_or_else(|| "User not found".to_string())?;

    if let Some(name) = payload.user_name {
        user.user_name = name;
    }
    if let Some(role) = payload.user_role {
        user.user_role = role;
    }
    Ok(user.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_create_creates_once_per_email() {
        let mut doc = Document::default();
        let first = find_or_create_user(&mut doc, "ana@example.com", Some("Ana"));
        let second = find_or_create_user(&mut doc, "ana@example.com", None);
        assert_eq!(doc.users.len(), 1);
        assert_eq!(first.user_id, second.user_id);
        assert_eq!(second.user_name, "Ana");
    }

    #[test]
    fn blank_name_falls_back_to_mailbox() {
        let mut doc = Document::default();
        let user = find_or_create_user(&mut doc, "bo@example.com", None);
        assert_eq!(user.user_name, "bo");
        assert_eq!(user.user_role, "member");
    }
}
