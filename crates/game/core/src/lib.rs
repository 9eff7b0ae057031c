//! Interactive, destructible map furniture for a tile-based game.
//!
//! `furniture-core` defines the furniture type catalog, builds placed
//! instances from it, and exposes the actions each instance supports so that
//! players, AI, and combat code can ask "can I do X to this?" without knowing
//! the concrete type. Construction flows through [`FurnitureFactory`]; placed
//! furniture lives in a [`FurnitureStore`] (or any other [`FurnitureManager`]).
pub mod capability;
pub mod config;
pub mod env;
pub mod error;
pub mod furniture;
pub mod state;

pub use capability::{
    Capability, CapabilityRule, CapabilitySet, Condition, Initializer, ResolvableActions,
};
pub use config::FurnitureConfig;
pub use env::{
    Catalog, CatalogBuilder, CatalogError, CatalogOracle, Color, ColorParseError, TypeTemplate,
    TypeTemplateBuilder, WorldOracle, palette,
};
pub use error::{ErrorSeverity, GameError};
pub use furniture::{
    Destructible, DisplayInfo, Durability, Furniture, FurnitureError, FurnitureFactory,
    FurnitureManager, HitPoints, LifecycleState, MoveError,
};
pub use state::{EntityId, FurnitureStore, LifecycleHooks, OccupantSlots, Position, StoreError};
