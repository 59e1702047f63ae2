//! Versioned JSON document persistence.
//!
//! Every piece of portal state that survives a restart (session, board,
//! submission draft, problem locks) is stored as one JSON file wrapped in
//! a `{version, payload}` envelope. A missing file, unreadable JSON, or an
//! envelope from a different version all degrade to the caller-supplied
//! default instead of surfacing a parse error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::StorageError;

/// Envelope schema version. Bump when a payload layout changes shape.
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    payload: T,
}

/// A named, versioned JSON document under the data directory.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    name: String,
}

impl Document {
    /// Open the document `<data_dir>/<name>.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open(name: &str) -> Result<Self, StorageError> {
        Ok(Self::at(data_dir()?, name))
    }

    /// Open the document under an explicit directory. Used by tests.
    pub fn at(dir: PathBuf, name: &str) -> Self {
        Self {
            path: dir.join(format!("{name}.json")),
            name: name.to_string(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the payload, falling back to `T::default()` when the file is
    /// absent, corrupt, or carries a different envelope version.
    pub fn load_or_default<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return T::default();
        };
        match serde_json::from_str::<Envelope<T>>(&content) {
            Ok(envelope) if envelope.version == ENVELOPE_VERSION => envelope.payload,
            _ => T::default(),
        }
    }

    /// Persist the payload inside the current envelope version.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be encoded or written.
    pub fn save<T: Serialize>(&self, payload: &T) -> Result<(), StorageError> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            payload,
        };
        let json =
            serde_json::to_string_pretty(&envelope).map_err(|source| StorageError::EncodeFailed {
                name: self.name.clone(),
                source,
            })?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::WriteFailed {
            name: self.name.clone(),
            source,
        })
    }

    /// Remove the document from disk. Missing files are not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailed {
                name: self.name.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, serde::Deserialize)]
    struct Sample {
        value: u32,
        label: String,
    }

    fn temp_doc(name: &str) -> (tempfile::TempDir, Document) {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::at(dir.path().to_path_buf(), name);
        (dir, doc)
    }

    #[test]
    fn missing_file_yields_default() {
        let (_dir, doc) = temp_doc("absent");
        assert_eq!(doc.load_or_default::<Sample>(), Sample::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, doc) = temp_doc("sample");
        let payload = Sample {
            value: 7,
            label: "seven".into(),
        };
        doc.save(&payload).unwrap();
        assert_eq!(doc.load_or_default::<Sample>(), payload);
    }

    #[test]
    fn corrupt_file_yields_default() {
        let (_dir, doc) = temp_doc("corrupt");
        std::fs::write(doc.path(), "{not json").unwrap();
        assert_eq!(doc.load_or_default::<Sample>(), Sample::default());
    }

    #[test]
    fn version_mismatch_yields_default() {
        let (_dir, doc) = temp_doc("versioned");
        std::fs::write(
            doc.path(),
            r#"{"version": 99, "payload": {"value": 7, "label": "seven"}}"#,
        )
        .unwrap();
        assert_eq!(doc.load_or_default::<Sample>(), Sample::default());
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let (_dir, doc) = temp_doc("cleared");
        doc.save(&Sample::default()).unwrap();
        doc.clear().unwrap();
        assert!(!doc.path().exists());
        doc.clear().unwrap();
    }
}
