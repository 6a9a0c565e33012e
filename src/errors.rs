use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the inventory, sales, and storage layers.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Not enough `{name}` in stock: requested {requested} kg, {available} kg available")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
    #[error("Persistence error: {0}")]
    Persistence(String),
}

pub type Result<T> = StdResult<T, ShopError>;

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        ShopError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::Persistence(err.to_string())
    }
}
