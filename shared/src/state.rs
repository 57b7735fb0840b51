use crate::store::Store;

/// Per-process state handed to every request.
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            store: Store::from_env(),
        }
    }
}
