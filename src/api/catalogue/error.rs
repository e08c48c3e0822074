//! Common API related to errors in the price catalogue

// External paths
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("cannot read catalogue entry, reason: {0}")]
    CannotDeserializeEntry(serde_json::Error),
}
