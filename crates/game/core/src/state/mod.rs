//! Placed furniture and the storage that owns it.
//!
//! [`FurnitureStore`] is the authoritative position index: it is the only code
//! path that changes a piece's coordinates, so the index and the instances can
//! never drift apart.
mod common;
mod error;
mod store;

pub use common::{EntityId, Position};
pub use error::StoreError;
pub use store::{FurnitureStore, LifecycleHooks, OccupantSlots};
