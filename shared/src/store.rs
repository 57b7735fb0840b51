use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use taskflow_atoms::Document;

/// File-backed document store. The whole document is read before every
/// operation and rewritten after; there is no locking and the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the data file path:
    /// 1. `DATA_FILE` environment variable.
    /// 2. Under a serverless runtime (no durable disk) an ephemeral
    ///    per-invocation file in the system temp dir.
    /// 3. `./data/taskflow.json`.
    pub fn from_env() -> Self {
        let path = std::env::var("DATA_FILE").map(PathBuf::from).unwrap_or_else(|_| {
            if std::env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
                let mut p = std::env::temp_dir();
                p.push("taskflow.json");
                p
            } else {
                PathBuf::from("./data/taskflow.json")
            }
        });
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the document. A missing, unreadable or corrupt file is
    /// logged and yields an empty document; the app starts over rather
    /// than failing the request.
    pub fn load(&self) -> Document {
        if !self.path.exists() {
            return Document::default();
        }
        let mut f = match OpenOptions::new().read(true).open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("Failed to open {}: {}", self.path.display(), e);
                return Document::default();
            }
        };
        let mut s = String::new();
        if let Err(e) = f.read_to_string(&mut s) {
            tracing::error!("Failed to read {}: {}", self.path.display(), e);
            return Document::default();
        }
        serde_json::from_str(&s).unwrap_or_else(|e| {
            tracing::error!("Corrupt data file {}: {}", self.path.display(), e);
            Document::default()
        })
    }

    /// Rewrite the whole document, pretty-printed with two-space indent.
    pub fn save(&self, doc: &Document) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create data dir: {}", e))?;
        }
        let s = serde_json::to_string_pretty(doc)
            .map_err(|e| format!("Failed to serialize document: {}", e))?;
        let mut f = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| format!("Failed to open {}: {}", self.path.display(), e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> Store {
        let mut path = std::env::temp_dir();
        path.push(format!("taskflow_store_{}_{}.json", name, uuid::Uuid::new_v4()));
        Store::new(path)
    }

    #[test]
    fn missing_file_loads_empty_document() {
        let store = temp_store("missing");
        let doc = store.load();
        assert!(doc.tasks.is_empty());
        assert!(doc.active_timer.is_none());
    }

    #[test]
    fn round_trips_a_document() {
        let store = temp_store("roundtrip");
        let mut doc = Document::default();
        taskflow_atoms::users::service::find_or_create_user(&mut doc, "x@example.com", None);
        store.save(&doc).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.users[0].user_email, "x@example.com");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_resets_to_empty() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();
        let doc = store.load();
        assert!(doc.users.is_empty());
        let _ = fs::remove_file(store.path());
    }
}
