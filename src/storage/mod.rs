pub mod flat_file;

use crate::{domain::Item, errors::Result};

pub use flat_file::FlatFileStorage;

/// Items recovered by a load, plus notes about records that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub items: Vec<Item>,
    pub warnings: Vec<String>,
}

/// Abstraction over the place inventory records are kept between runs.
pub trait StorageBackend {
    fn load(&self) -> Result<LoadReport>;
    fn save(&self, items: &[Item]) -> Result<()>;
    /// Human readable description of where records live.
    fn location(&self) -> String;
}
