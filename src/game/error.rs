use thiserror::Error;

/// Errors the game core can produce. In-game terminal conditions (hitting
/// a wall or the body itself) are normal tick outcomes, not errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board construction was given a non-positive size.
    #[error("board size must be a positive integer, got {0}")]
    InvalidSize(i32),

    /// Food placement found no free cell; the body (plus the previous
    /// food cell) covers the whole board.
    #[error("no free cell left for food placement")]
    BoardSaturated,
}
