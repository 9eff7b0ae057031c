use std::collections::BTreeMap;
use std::fmt;

use arrayvec::ArrayVec;

use crate::config::FurnitureConfig;
use crate::env::WorldOracle;
use crate::furniture::{
    Destructible, Furniture, FurnitureFactory, FurnitureManager, HitPoints, MoveError,
};

use super::{EntityId, Position, StoreError};

pub type OccupantSlots = ArrayVec<EntityId, { FurnitureConfig::MAX_OCCUPANTS_PER_TILE }>;

/// Callbacks fired when furniture enters or leaves a [`FurnitureStore`].
pub trait LifecycleHooks {
    fn on_add(&mut self, _furniture: &Furniture) {}

    fn on_remove(&mut self, _furniture: &Furniture) {}
}

/// Authoritative storage for placed furniture, indexed by id and by tile.
///
/// # Invariants
///
/// - Every stored piece appears exactly once in the occupancy index, at its
///   own `position()`
/// - No tile holds more than [`FurnitureConfig::MAX_OCCUPANTS_PER_TILE`] pieces
///
/// Stored furniture is only lent out by shared reference. Damage goes through
/// [`damage`](Self::damage) and moves through the manager methods.
#[derive(Default)]
pub struct FurnitureStore {
    furniture: BTreeMap<EntityId, Furniture>,
    occupancy: BTreeMap<Position, OccupantSlots>,
    next_id: Option<EntityId>,
    hooks: Option<Box<dyn LifecycleHooks>>,
}

impl FurnitureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hooks(hooks: Box<dyn LifecycleHooks>) -> Self {
        Self {
            hooks: Some(hooks),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.furniture.len()
    }

    pub fn is_empty(&self) -> bool {
        self.furniture.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Furniture> {
        self.furniture.get(&id)
    }

    /// Applies damage to stored furniture and reports whether it is destroyed.
    ///
    /// Destroyed furniture stays in place until [`reap_destroyed`](Self::reap_destroyed).
    pub fn damage(&mut self, id: EntityId, amount: HitPoints) -> Result<bool, StoreError> {
        let furniture = self.furniture.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        furniture.take_damage(amount);
        Ok(furniture.is_destroyed())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Furniture> {
        self.furniture.values()
    }

    /// Furniture standing on `position`, in insertion order.
    pub fn at(&self, position: Position) -> impl Iterator<Item = &Furniture> {
        self.occupancy
            .get(&position)
            .into_iter()
            .flatten()
            .filter_map(|id| self.furniture.get(id))
    }

    pub fn occupants(&self, position: Position) -> Option<&OccupantSlots> {
        self.occupancy.get(&position)
    }

    /// Builds furniture with the next free id and places it.
    pub fn spawn(
        &mut self,
        factory: &FurnitureFactory<'_>,
        type_key: &str,
        position: Position,
    ) -> Result<EntityId, StoreError> {
        let id = self.allocate_id()?;
        let furniture = factory.create(id, type_key, position)?;
        self.insert(furniture)
    }

    /// Places an already built piece of furniture.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] if the id is taken, [`StoreError::TileFull`]
    /// if its tile has no free slot.
    pub fn insert(&mut self, furniture: Furniture) -> Result<EntityId, StoreError> {
        let id = furniture.id();
        let position = furniture.position();

        if self.furniture.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        self.occupancy
            .entry(position)
            .or_default()
            .try_push(id)
            .map_err(|_| StoreError::TileFull { position })?;

        if self.next_id.is_none_or(|next| id >= next) {
            self.next_id = Some(id.next().unwrap_or(id));
        }

        tracing::debug!(
            "stored furniture {} ({}) at {}",
            id,
            furniture.type_key(),
            position
        );
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_add(&furniture);
        }
        self.furniture.insert(id, furniture);
        Ok(id)
    }

    /// Removes furniture from storage, firing `on_remove`.
    pub fn remove(&mut self, id: EntityId) -> Option<Furniture> {
        let furniture = self.furniture.remove(&id)?;
        self.release_slot(furniture.position(), id);

        tracing::debug!("removed furniture {} ({})", id, furniture.type_key());
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_remove(&furniture);
        }
        Some(furniture)
    }

    /// Removes every destroyed piece and returns them in id order.
    pub fn reap_destroyed(&mut self) -> Vec<Furniture> {
        let destroyed: Vec<EntityId> = self
            .furniture
            .values()
            .filter(|furniture| furniture.is_destroyed())
            .map(Furniture::id)
            .collect();

        if !destroyed.is_empty() {
            tracing::debug!("reaping {} destroyed furniture", destroyed.len());
        }
        destroyed
            .into_iter()
            .filter_map(|id| self.remove(id))
            .collect()
    }

    /// Moves stored furniture after the world approves the destination.
    ///
    /// The world is asked about the stored instance, so the check always sees
    /// its current position.
    ///
    /// # Errors
    ///
    /// [`MoveError::Blocked`] if the world refuses, otherwise the
    /// [`StoreError`] from [`move_furniture`](FurnitureManager::move_furniture).
    pub fn try_move<W>(
        &mut self,
        world: &W,
        id: EntityId,
        to: Position,
    ) -> Result<(), MoveError<StoreError>>
    where
        W: WorldOracle + ?Sized,
    {
        let furniture = self
            .furniture
            .get(&id)
            .ok_or(MoveError::Manager(StoreError::NotFound(id)))?;
        if !furniture.can_move_to(world, to) {
            return Err(MoveError::Blocked { id, to });
        }
        self.move_furniture(id, to).map_err(MoveError::Manager)
    }

    fn allocate_id(&self) -> Result<EntityId, StoreError> {
        match self.next_id {
            None => Ok(EntityId::FIRST),
            Some(next) if !self.furniture.contains_key(&next) => Ok(next),
            Some(_) => Err(StoreError::IdsExhausted),
        }
    }

    fn release_slot(&mut self, position: Position, id: EntityId) {
        if let Some(slot) = self.occupancy.get_mut(&position) {
            if let Some(index) = slot.iter().position(|occupant| *occupant == id) {
                slot.remove(index);
            }
            if slot.is_empty() {
                self.occupancy.remove(&position);
            }
        }
    }
}

impl FurnitureManager for FurnitureStore {
    type Error = StoreError;

    fn move_furniture(&mut self, id: EntityId, to: Position) -> Result<(), StoreError> {
        let from = self
            .furniture
            .get(&id)
            .map(Furniture::position)
            .ok_or(StoreError::NotFound(id))?;
        if from == to {
            return Ok(());
        }

        self.occupancy
            .entry(to)
            .or_default()
            .try_push(id)
            .map_err(|_| StoreError::TileFull { position: to })?;
        self.release_slot(from, id);

        if let Some(furniture) = self.furniture.get_mut(&id) {
            furniture.set_position(to);
        }
        tracing::debug!("moved furniture {} {} -> {}", id, from, to);
        Ok(())
    }
}

impl fmt::Debug for FurnitureStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FurnitureStore")
            .field("furniture", &self.furniture)
            .field("occupancy", &self.occupancy)
            .field("next_id", &self.next_id)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}
