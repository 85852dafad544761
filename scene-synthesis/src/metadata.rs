/// Per-seed metadata store.
///
/// The schema for recording scene parameters has not been settled, so the
/// store only prepares a versioned empty envelope today and records nothing.
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SynthesisError;

pub struct MetadataStore {
    path: PathBuf,
}

impl MetadataStore {
    /// Prepare the store file, creating the empty envelope if non-existent,
    /// and return a handle to it. Held open for the process lifetime.
    pub fn open(path: &Path) -> Result<Self, SynthesisError> {
        if !path.exists() {
            let envelope = json!({ "version": 1, "scenes": [] });
            fs::write(path, serde_json::to_string_pretty(&envelope)?)?;
        }
        log::info!("metadata store ready at {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // TODO: record per-seed scene parameters once a schema is agreed on
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scene-synthesis-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join("meta_data.db")
    }

    #[test]
    fn open_creates_the_envelope_once() {
        let path = temp_store_path("meta-open");
        let store = MetadataStore::open(&path).unwrap();
        assert!(store.path().exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"version\""));

        // Reopening must not clobber the existing file.
        fs::write(&path, "{\"version\":1,\"scenes\":[{\"seed\":1}]}").unwrap();
        MetadataStore::open(&path).unwrap();
        let preserved = fs::read_to_string(&path).unwrap();
        assert!(preserved.contains("\"seed\":1"));
    }
}
