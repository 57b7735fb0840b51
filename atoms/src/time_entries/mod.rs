pub mod http;
pub mod model;
pub mod service;

pub use model::{ActiveTimer, CreateTimeEntryPayload, TimeEntry, TimerPayload};
