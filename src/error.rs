// Errors for loading reference tables
//
// Resolution itself never fails; only building tables from outside data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid table entry: {0}")]
    InvalidEntry(String),
}
