//! Error types for catalogue loading.
//!
//! The search layer itself never fails; only reading and validating a
//! descriptor list can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A descriptor violates the input contract (empty name).
    #[error("descriptor #{index} ({id:?}) has an empty name")]
    InvalidDescriptor { index: usize, id: String },

    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
