// ========== USER ==========
pub use taskflow_atoms::users::model::{CreateUserPayload, UpdateUserPayload, User};

// ========== WORKSPACE / PROJECT ==========
pub use taskflow_atoms::projects::model::{CreateProjectPayload, Project, UpdateProjectPayload};
pub use taskflow_atoms::workspaces::model::{
    CreateWorkspacePayload, UpdateWorkspacePayload, Workspace, WorkspaceMember,
};

// ========== TASK ==========
pub use taskflow_atoms::tasks::model::{CreateTaskPayload, Task, UpdateTaskPayload};

// ========== TIME TRACKING ==========
pub use taskflow_atoms::time_entries::model::{
    ActiveTimer, CreateTimeEntryPayload, TimeEntry, TimerPayload,
};

// ========== ATTENDANCE ==========
pub use taskflow_atoms::attendance::model::{
    AttendanceRecord, CleanupSummary, ClockPayload, UpdateAttendancePayload,
};

// ========== COMMENTS / NOTIFICATIONS / ACTIVITY ==========
pub use taskflow_atoms::activity::model::ActivityEntry;
pub use taskflow_atoms::comments::model::{Comment, CreateCommentPayload};
pub use taskflow_atoms::notifications::model::{Notification, ReadAllPayload};

// ========== CHAT / PRESENCE ==========
pub use taskflow_atoms::chat::model::{ChatMessage, CreateChatMessagePayload};
pub use taskflow_atoms::presence::model::{HeartbeatPayload, OnlineStatus, Presence};

// ========== ROADMAP ==========
pub use taskflow_atoms::roadmap::model::{Month, Phase, Week};
