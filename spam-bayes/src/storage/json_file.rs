use crate::error::{BayesError, Result};
use crate::spam::{FrequencyTable, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use super::ModelStore;

/// Version of the on-disk document layout
pub const FORMAT_VERSION: u32 = 1;

/// On-disk model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredModel {
    pub version: u32,
    pub trained_at: DateTime<Utc>,
    pub ham_words: FrequencyTable,
    pub spam_words: FrequencyTable,
}

impl StoredModel {
    pub fn new(model: &Model) -> Self {
        Self {
            version: FORMAT_VERSION,
            trained_at: Utc::now(),
            ham_words: model.ham_words.clone(),
            spam_words: model.spam_words.clone(),
        }
    }

    pub fn into_model(self) -> Result<Model> {
        if self.version != FORMAT_VERSION {
            return Err(BayesError::Serialization(format!(
                "Unsupported model format version {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        Ok(Model::from_tables(self.ham_words, self.spam_words))
    }
}

/// Model stored as a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "model".into());
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl ModelStore for JsonFileStore {
    fn load(&self) -> Result<Model> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BayesError::ModelNotFound(format!(
                    "{} (run with --train first)",
                    self.path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredModel = serde_json::from_slice(&content)?;
        debug!(
            "Loaded model from {} trained at {}",
            self.path.display(),
            stored.trained_at
        );
        stored.into_model()
    }

    fn save(&mut self, model: &Model) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BayesError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create directory {}: {}", parent.display(), e),
                    ))
                })?;
            }
        }

        let data = serde_json::to_vec(&StoredModel::new(model))?;

        // Write to a temp file first, then move into place (atomic operation)
        let tmp_path = self.tmp_path();
        let written = fs::write(&tmp_path, data).and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        info!("Stored model at {}", self.path.display());

        Ok(())
    }
}
