pub mod auth;
pub mod online;
pub mod state;
pub mod store;
pub mod types;
pub mod users;

pub use state::AppState;
pub use store::Store;
