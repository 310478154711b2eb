use rand::rngs::StdRng;
use rand::SeedableRng;

use super::body::Body;
use super::board::{Board, Cell, Coords};
use super::config::GameConfig;
use super::direction::Direction;
use super::error::GameError;
use super::food::{self, Food};
use super::state::GameState;

/// Cells past the start cell where post-reset food is pinned, matching
/// the naive "five cells away" starting placement.
const FOOD_START_OFFSET: u32 = 5;

/// What ended the run on a game-over tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// The candidate head cell was off the board.
    Wall,
    /// The candidate head cell was occupied by the body.
    SelfCollision,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The body moved to a valid cell.
    Moved { ate_food: bool, reversed: bool },
    /// Terminal condition: the state has been reset to the canonical
    /// start. A normal transition, not an error.
    GameOver {
        collision: CollisionType,
        /// Score of the run that just ended, read before the reset.
        final_score: u32,
    },
}

/// The game engine: owns the board addressing, the configuration, and
/// the RNG, and drives the single transition function [`step`](Self::step)
/// over a [`GameState`].
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    rng: StdRng,
}

impl GameEngine {
    /// Build an engine, validating the configured board size once.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a deterministic RNG, for tests.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        let board = Board::new(config.board_size)?;
        Ok(Self { config, board, rng })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The canonical starting cell: one third of the way into the board
    /// on both axes, rounded half up.
    fn starting_cell(&self) -> Cell {
        let third = (self.board.size() as f64 / 3.0).round() as i32;
        self.board.cell(Coords::new(third, third))
    }

    /// Fresh state: single-cell body at the canonical start, food at a
    /// fixed offset from it, direction Right, score zero.
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let body = Body::new(self.starting_cell());
        let food = self.starting_food(&body)?;
        Ok(GameState {
            body,
            food,
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
        })
    }

    /// Post-reset food sits `FOOD_START_OFFSET` cells past the start and
    /// never carries the reversal effect. Boards too small for the
    /// offset fall back to the placement policy.
    fn starting_food(&mut self, body: &Body) -> Result<Food, GameError> {
        let cell = body.head().id + FOOD_START_OFFSET;
        if cell <= self.board.max_cell() {
            return Ok(Food {
                cell,
                reverses: false,
            });
        }
        food::place_next(&mut self.rng, body.occupied(), 0, self.board.max_cell(), 0.0)
    }

    /// Advance the game by one tick.
    ///
    /// Commits the pending direction, computes the candidate head cell,
    /// and either resets on a terminal condition (wall exit or
    /// self-collision) or moves the body, growing on food consumption
    /// and applying the reversal mechanic when the consumed food carries
    /// it. The only error is [`GameError::BoardSaturated`] from food
    /// placement on a nearly full board.
    pub fn step(&mut self, state: &mut GameState) -> Result<TickOutcome, GameError> {
        if let Some(pending) = state.pending_direction.take() {
            state.direction = pending;
        }

        let next_coords = self
            .board
            .coords_in_direction(state.body.head().coords, state.direction);

        if self.board.is_out_of_bounds(next_coords) {
            let final_score = state.score;
            *state = self.reset()?;
            return Ok(TickOutcome::GameOver {
                collision: CollisionType::Wall,
                final_score,
            });
        }

        let next_cell = self.board.cell(next_coords);
        if state.body.contains(next_cell.id) {
            let final_score = state.score;
            *state = self.reset()?;
            return Ok(TickOutcome::GameOver {
                collision: CollisionType::SelfCollision,
                final_score,
            });
        }

        let ate_food = next_cell.id == state.food.cell;

        state.body.advance(next_cell);
        if !ate_food {
            // Ordinary move: length is invariant. Growth skips eviction.
            state.body.evict_tail();
        }

        let mut reversed = false;
        if ate_food {
            if state.food.reverses {
                self.apply_reversal(state);
                reversed = true;
            }
            let consumed = state.food.cell;
            state.food = food::place_next(
                &mut self.rng,
                state.body.occupied(),
                consumed,
                self.board.max_cell(),
                self.config.reversal_probability,
            )?;
            state.score += 1;
        }

        Ok(TickOutcome::Moved { ate_food, reversed })
    }

    /// The reversal mechanic: the former tail becomes the head and the
    /// body travels away from the direction the tail was laid down in.
    ///
    /// Reversing travel without reversing the chain would drive the old
    /// head straight into the cell behind it, so head and tail swap
    /// roles instead. Any pending request is dropped; it was validated
    /// against a direction that no longer applies.
    fn apply_reversal(&self, state: &mut GameState) {
        let laid = self.tail_travel_direction(state);
        state.direction = laid.opposite();
        state.pending_direction = None;
        state.body.reverse();
    }

    /// Direction the tail was traveling when it was laid down, inferred
    /// from the tail cell and its chain neighbor. A single-cell body has
    /// no neighbor; the committed direction stands in.
    fn tail_travel_direction(&self, state: &GameState) -> Direction {
        match state.body.neighbor_of_tail() {
            Some(neighbor) => {
                let tail = state.body.tail();
                Direction::from_delta(
                    neighbor.coords.row - tail.coords.row,
                    neighbor.coords.col - tail.coords.col,
                )
                .unwrap_or(state.direction)
            }
            None => state.direction,
        }
    }
}
