//! Furniture store errors.
//!
//! Errors related to managed storage: identity, tile capacity, and lookups.

use crate::config::FurnitureConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::furniture::FurnitureError;
use crate::state::{EntityId, Position};

/// Errors raised by [`FurnitureStore`](crate::state::FurnitureStore).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No furniture with this id is stored.
    #[error("furniture {0} not found")]
    NotFound(EntityId),

    /// Another piece of furniture already uses this id.
    #[error("furniture id {0} is already in use")]
    DuplicateId(EntityId),

    /// The tile already holds the maximum number of pieces.
    #[error("tile {position} is full (max: {max})", max = FurnitureConfig::MAX_OCCUPANTS_PER_TILE)]
    TileFull { position: Position },

    /// Every entity id has been allocated.
    #[error("entity id space exhausted")]
    IdsExhausted,

    /// The factory rejected the spawn request.
    #[error(transparent)]
    Create(#[from] FurnitureError),
}

impl GameError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StoreError::TileFull { .. } => ErrorSeverity::Recoverable,
            StoreError::NotFound(_) | StoreError::DuplicateId(_) => ErrorSeverity::Validation,
            StoreError::IdsExhausted => ErrorSeverity::Fatal,
            StoreError::Create(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "STORE_NOT_FOUND",
            StoreError::DuplicateId(_) => "STORE_DUPLICATE_ID",
            StoreError::TileFull { .. } => "STORE_TILE_FULL",
            StoreError::IdsExhausted => "STORE_IDS_EXHAUSTED",
            StoreError::Create(err) => err.error_code(),
        }
    }
}
