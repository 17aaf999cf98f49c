use crate::error::{BayesError, Result};
use crate::spam::Model;

use super::ModelStore;

/// Keeps the model in memory for the lifetime of the store
#[derive(Debug, Default)]
pub struct MemoryStore {
    model: Option<Model>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `model`
    pub fn with_model(model: Model) -> Self {
        Self { model: Some(model) }
    }
}

impl ModelStore for MemoryStore {
    fn load(&self) -> Result<Model> {
        self.model
            .clone()
            .ok_or_else(|| BayesError::ModelNotFound("in-memory store is empty".to_string()))
    }

    fn save(&mut self, model: &Model) -> Result<()> {
        self.model = Some(model.clone());
        Ok(())
    }
}
