//! Error types for the catalog.

use aerofast_core::error::AerofastError;

/// Errors from building or looking up the catalog.
///
/// Searching never fails: an empty result is a valid view.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product category id: {0}")]
    DuplicateId(String),
    #[error("product category not found: {0}")]
    NotFound(String),
}

impl From<CatalogError> for AerofastError {
    fn from(err: CatalogError) -> Self {
        AerofastError::Catalog(err.to_string())
    }
}
