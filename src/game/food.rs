use std::collections::HashSet;

use rand::Rng;

use super::board::CellId;
use super::error::GameError;

/// Chance that a freshly placed food item carries the reversal effect.
pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.3;

/// The single active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: CellId,
    /// Consuming this food reverses the body's direction of travel.
    pub reverses: bool,
}

/// Choose the next food cell: uniform draws from `[1, max_cell]`,
/// rejecting anything in `occupied` and the `previous` food cell.
///
/// A board with no free cell fails with [`GameError::BoardSaturated`]
/// up front; the redraw loop is additionally capped so it can never spin
/// unbounded. With at least one free cell the cap of `16 * max_cell`
/// draws makes a spurious failure vanishingly unlikely (misses every
/// draw with probability ~e^-16 even when one cell remains).
///
/// The reversal flag is drawn independently of the chosen cell.
pub fn place_next(
    rng: &mut impl Rng,
    occupied: &HashSet<CellId>,
    previous: CellId,
    max_cell: CellId,
    reversal_probability: f64,
) -> Result<Food, GameError> {
    let mut free = (max_cell as usize).saturating_sub(occupied.len());
    if (1..=max_cell).contains(&previous) && !occupied.contains(&previous) {
        free = free.saturating_sub(1);
    }
    if free == 0 {
        return Err(GameError::BoardSaturated);
    }

    let max_attempts = 16 * max_cell as usize;
    for _ in 0..max_attempts {
        let cell = rng.gen_range(1..=max_cell);
        if occupied.contains(&cell) || cell == previous {
            continue;
        }
        let reverses = rng.gen_bool(reversal_probability);
        return Ok(Food { cell, reverses });
    }
    Err(GameError::BoardSaturated)
}
