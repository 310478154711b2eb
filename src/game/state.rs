use super::body::Body;
use super::board::CellId;
use super::direction::Direction;
use super::food::Food;

/// Rendering classification of a cell. Body wins over food, although by
/// invariant food is never placed under the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Plain,
    Food { reverses: bool },
    Body,
}

/// The complete state of one run: body, food, direction, score. Owned
/// and mutated exclusively by the [`GameEngine`](super::GameEngine);
/// collaborators read snapshots for rendering.
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub food: Food,
    /// Direction committed for the next tick.
    pub direction: Direction,
    /// Last direction request since the previous tick, if any. Requests
    /// coalesce: the engine commits this at the next tick boundary.
    pub pending_direction: Option<Direction>,
    pub score: u32,
}

impl GameState {
    /// Request a direction change for the next tick. Silently ignored
    /// when the request is the exact opposite of the committed direction
    /// and the body is longer than one cell, since doubling back into
    /// the neck is an instant self-collision. Later requests replace
    /// earlier ones.
    pub fn request_direction(&mut self, requested: Direction) {
        if requested.is_opposite(self.direction) && self.body.len() > 1 {
            return;
        }
        self.pending_direction = Some(requested);
    }

    /// Classify a cell for rendering.
    pub fn classify(&self, cell: CellId) -> CellKind {
        if self.body.contains(cell) {
            CellKind::Body
        } else if cell == self.food.cell {
            CellKind::Food {
                reverses: self.food.reverses,
            }
        } else {
            CellKind::Plain
        }
    }
}
