use serde::{Deserialize, Serialize};

use super::food::DEFAULT_REVERSAL_PROBABILITY;

/// Configuration for a game. The board size is validated by
/// [`Board::new`](super::Board::new) at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: i32,
    /// Cadence of the external tick source, in milliseconds.
    pub tick_interval_ms: u64,
    /// Probability that a placed food item carries the reversal effect.
    pub reversal_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            tick_interval_ms: 550,
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom board size and default everything else.
    pub fn new(board_size: i32) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Small board for tests.
    pub fn small() -> Self {
        Self::new(5)
    }
}
