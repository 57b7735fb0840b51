pub mod http;
pub mod model;
pub mod service;

pub use model::{CreateWorkspacePayload, UpdateWorkspacePayload, Workspace, WorkspaceMember};
