pub mod model;
pub mod service;

pub use model::{AttendanceRecord, CleanupSummary, ClockPayload, UpdateAttendancePayload};
