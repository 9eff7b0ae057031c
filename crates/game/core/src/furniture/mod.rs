//! Placed furniture instances.
//!
//! A [`Furniture`] is built by the [`FurnitureFactory`] from a catalog
//! template. Everything about it is fixed at construction except its hit
//! points, its destroyed flag, and (through the manager) its position.
mod factory;
mod movement;

pub use factory::{FurnitureError, FurnitureFactory};
pub use movement::{FurnitureManager, MoveError};

use crate::capability::{Capability, CapabilitySet, ResolvableActions};
use crate::env::Color;
use crate::state::{EntityId, Position};

/// Signed hit point count. Negative damage heals.
pub type HitPoints = i32;

/// Two-state lifecycle of a destructible object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleState {
    Alive,
    /// Terminal. Reached when hit points first drop to zero or below.
    Destroyed,
}

/// Hit points plus the one-way destroyed latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Durability {
    hit_points: HitPoints,
    destroyed: bool,
}

impl Durability {
    pub const fn new(hit_points: HitPoints) -> Self {
        Self {
            hit_points,
            destroyed: false,
        }
    }

    #[inline]
    pub const fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    #[inline]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Subtracts `amount` and latches `destroyed` once hit points are <= 0.
    ///
    /// Returns true only for the call that destroyed the object.
    pub fn take_damage(&mut self, amount: HitPoints) -> bool {
        self.hit_points = self.hit_points.saturating_sub(amount);
        if self.hit_points <= 0 && !self.destroyed {
            self.destroyed = true;
            return true;
        }
        false
    }
}

/// Damage interface shared by everything that can be destroyed.
pub trait Destructible {
    fn hit_points(&self) -> HitPoints;

    fn is_destroyed(&self) -> bool;

    /// Applies flat damage. Never fails; amounts are not validated.
    fn take_damage(&mut self, amount: HitPoints);

    fn lifecycle(&self) -> LifecycleState {
        if self.is_destroyed() {
            LifecycleState::Destroyed
        } else {
            LifecycleState::Alive
        }
    }
}

/// Name and color for console/log presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInfo<'a> {
    pub name: &'a str,
    /// `None` when the type has no console color.
    pub color: Option<Color>,
}

/// A piece of furniture placed on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Furniture {
    id: EntityId,
    type_key: String,
    position: Position,

    // Copied from the template at construction
    name: String,
    glyph: Option<char>,
    color: Option<Color>,
    bg_color: Option<Color>,
    console_color: Option<Color>,
    passable: bool,
    blocks_los: bool,
    is_wall: bool,

    durability: Durability,
    capabilities: CapabilitySet,
}

impl Furniture {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> Option<char> {
        self.glyph
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn bg_color(&self) -> Option<Color> {
        self.bg_color
    }

    pub fn console_color(&self) -> Option<Color> {
        self.console_color
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn blocks_los(&self) -> bool {
        self.blocks_los
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    pub fn display_info(&self) -> DisplayInfo<'_> {
        DisplayInfo {
            name: &self.name,
            color: self.console_color,
        }
    }

    /// Idempotent add. Only reachable while the factory builds the instance.
    pub(crate) fn register_capability(&mut self, capability: Capability) {
        if self.capabilities.register(capability) {
            tracing::trace!(
                "furniture {} ({}) registered {}",
                self.id,
                self.type_key,
                capability
            );
        }
    }

    /// Only the store changes coordinates, keeping its occupancy index in sync.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl ResolvableActions for Furniture {
    fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }
}

impl Destructible for Furniture {
    fn hit_points(&self) -> HitPoints {
        self.durability.hit_points()
    }

    fn is_destroyed(&self) -> bool {
        self.durability.is_destroyed()
    }

    fn take_damage(&mut self, amount: HitPoints) {
        if self.durability.is_destroyed() {
            tracing::warn!(
                "furniture {} ({}) took {} damage after being destroyed",
                self.id,
                self.type_key,
                amount
            );
        }

        if self.durability.take_damage(amount) {
            tracing::debug!(
                "furniture {} ({}) destroyed at {}",
                self.id,
                self.type_key,
                self.position
            );
        }
    }
}
