use crate::furniture::Furniture;
use crate::state::Position;

/// Read-only view of the owning world, consulted before furniture moves.
///
/// The world is the sole authority on tile legality: map bounds, terrain,
/// and other entities. Furniture never decides this on its own.
pub trait WorldOracle {
    fn can_move_to(&self, furniture: &Furniture, to: Position) -> bool;
}

impl<F> WorldOracle for F
where
    F: Fn(&Furniture, Position) -> bool,
{
    fn can_move_to(&self, furniture: &Furniture, to: Position) -> bool {
        self(furniture, to)
    }
}
