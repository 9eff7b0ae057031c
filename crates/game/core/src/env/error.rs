//! Catalog construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that reject a catalog at load time.
///
/// A catalog that fails validation is never built, so lookups against a
/// constructed catalog only ever see well-formed templates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The same type key was declared twice.
    #[error("furniture type '{0}' is declared more than once")]
    DuplicateType(String),

    /// A type key was empty or whitespace.
    #[error("furniture type key must not be empty")]
    EmptyTypeKey,

    /// A template declared an empty display name.
    #[error("furniture type '{0}' has an empty name")]
    EmptyName(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateType(_) => "CATALOG_DUPLICATE_TYPE",
            CatalogError::EmptyTypeKey => "CATALOG_EMPTY_TYPE_KEY",
            CatalogError::EmptyName(_) => "CATALOG_EMPTY_NAME",
        }
    }
}
