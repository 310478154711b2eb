//! Core game-state engine.
//!
//! Everything in here is pure game logic with no I/O or rendering
//! dependencies: board addressing, the body chain with its mirrored
//! occupied-set, the food placement policy, and the per-tick transition
//! function including the direction-reversal mechanic.

pub mod board;
pub mod body;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod state;

pub use board::{Board, Cell, CellId, Coords};
pub use body::Body;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{CollisionType, GameEngine, TickOutcome};
pub use error::GameError;
pub use food::Food;
pub use state::{CellKind, GameState};
