use serde::{Deserialize, Serialize};

use crate::activity::model::ActivityEntry;
use crate::attendance::model::AttendanceRecord;
use crate::chat::model::ChatMessage;
use crate::comments::model::Comment;
use crate::notifications::model::Notification;
use crate::presence::model::Presence;
use crate::projects::model::Project;
use crate::roadmap::model::Phase;
use crate::tasks::model::Task;
use crate::time_entries::model::{ActiveTimer, TimeEntry};
use crate::users::model::User;
use crate::workspaces::model::Workspace;

/// The whole persisted application state. Every request loads this,
/// mutates one collection and writes the whole thing back; last writer
/// wins. Fields are individually defaulted so a document written by an
/// older build still loads.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub presence: Vec<Presence>,
    /// At most one timer runs at a time across the whole app.
    #[serde(default)]
    pub active_timer: Option<ActiveTimer>,
}
