//! Common API related to errors in single sales records

// External paths
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cannot read sales record, reason: {0}")]
    CannotDeserializeRecord(serde_json::Error),
    #[error("product not found in the price catalogue: {0}")]
    ProductNotFound(String),
}
