pub mod model;

pub use model::{HeartbeatPayload, OnlineStatus, Presence};
