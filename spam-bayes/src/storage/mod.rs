//! Model storage module
//!
//! Provides model storage backends behind the [`ModelStore`] trait:
//! - [`json_file`]: JSON document on disk, written atomically
//! - [`memory`]: in-process store, mainly for tests

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::spam::Model;

/// Load/store boundary for a trained model
pub trait ModelStore {
    /// Load the stored model, failing with `ModelNotFound` if none exists
    fn load(&self) -> Result<Model>;

    /// Replace the stored model
    fn save(&mut self, model: &Model) -> Result<()>;
}
