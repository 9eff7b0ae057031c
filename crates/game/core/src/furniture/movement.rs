//! Movement delegate.
//!
//! Furniture owns no movement logic. Legality comes from the world
//! ([`WorldOracle`]) and committing a move belongs to the manager
//! ([`FurnitureManager`]), which also keeps the position index.

use crate::env::WorldOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::furniture::Furniture;
use crate::state::{EntityId, Position};

/// Storage that commits coordinate changes for furniture it manages.
pub trait FurnitureManager {
    type Error;

    /// Moves furniture `id` to `to`, updating any position index.
    fn move_furniture(&mut self, id: EntityId, to: Position) -> Result<(), Self::Error>;
}

/// Failure of a checked move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError<E> {
    /// The world refused the destination. The manager was not called.
    #[error("furniture {id} cannot move to {to}")]
    Blocked { id: EntityId, to: Position },

    #[error("manager rejected move: {0}")]
    Manager(#[source] E),
}

impl<E: GameError> GameError for MoveError<E> {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Blocked { .. } => ErrorSeverity::Recoverable,
            MoveError::Manager(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
            MoveError::Manager(err) => err.error_code(),
        }
    }
}

impl Furniture {
    /// Asks the world whether this piece may move to `to`.
    pub fn can_move_to<W>(&self, world: &W, to: Position) -> bool
    where
        W: WorldOracle + ?Sized,
    {
        world.can_move_to(self, to)
    }

    /// Hands the move to the manager, exactly once per call.
    ///
    /// [`can_move_to`](Self::can_move_to) should always be checked first; this
    /// method does not check it. Use [`try_move_to`](Self::try_move_to) for a
    /// checked move.
    pub fn move_to<M>(&self, manager: &mut M, to: Position) -> Result<(), M::Error>
    where
        M: FurnitureManager + ?Sized,
    {
        tracing::debug!(
            "furniture {} ({}) moving {} -> {}",
            self.id(),
            self.type_key(),
            self.position(),
            to
        );
        manager.move_furniture(self.id(), to)
    }

    /// Checks legality with the world, then moves through the manager.
    ///
    /// # Errors
    ///
    /// [`MoveError::Blocked`] if the world refuses the destination, otherwise
    /// whatever the manager reports.
    pub fn try_move_to<W, M>(
        &self,
        world: &W,
        manager: &mut M,
        to: Position,
    ) -> Result<(), MoveError<M::Error>>
    where
        W: WorldOracle + ?Sized,
        M: FurnitureManager + ?Sized,
    {
        if !self.can_move_to(world, to) {
            return Err(MoveError::Blocked { id: self.id(), to });
        }
        self.move_to(manager, to).map_err(MoveError::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FurnitureConfig;
    use crate::env::Catalog;
    use crate::furniture::FurnitureFactory;

    #[derive(Default)]
    struct RecordingManager {
        calls: Vec<(EntityId, Position)>,
    }

    impl FurnitureManager for RecordingManager {
        type Error = ();

        fn move_furniture(&mut self, id: EntityId, to: Position) -> Result<(), ()> {
            self.calls.push((id, to));
            Ok(())
        }
    }

    fn chair() -> Furniture {
        let catalog = Catalog::builtin();
        let config = FurnitureConfig::default();
        FurnitureFactory::new(&catalog, &config)
            .create(EntityId(9), "chair", Position::new(2, 2))
            .unwrap()
    }

    #[test]
    fn can_move_to_asks_the_world_verbatim() {
        let chair = chair();
        let world = |furniture: &Furniture, to: Position| furniture.id() == EntityId(9) && to.x > 0;

        assert!(chair.can_move_to(&world, Position::new(1, 0)));
        assert!(!chair.can_move_to(&world, Position::new(-1, 0)));
    }

    #[test]
    fn try_move_to_skips_manager_when_blocked() {
        let chair = chair();
        let mut manager = RecordingManager::default();
        let deny_all = |_: &Furniture, _: Position| false;

        let result = chair.try_move_to(&deny_all, &mut manager, Position::new(3, 2));

        assert_eq!(
            result,
            Err(MoveError::Blocked {
                id: EntityId(9),
                to: Position::new(3, 2)
            })
        );
        assert!(manager.calls.is_empty());
    }

    #[test]
    fn try_move_to_delegates_when_allowed() {
        let chair = chair();
        let mut manager = RecordingManager::default();
        let allow_all = |_: &Furniture, _: Position| true;

        chair
            .try_move_to(&allow_all, &mut manager, Position::new(3, 2))
            .unwrap();

        assert_eq!(manager.calls, vec![(EntityId(9), Position::new(3, 2))]);
    }
}
