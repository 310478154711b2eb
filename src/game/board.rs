use super::direction::Direction;
use super::error::GameError;

/// Identifier of a board cell: 1-based, row-major, densely packed in
/// `[1, size * size]`.
pub type CellId = u32;

/// A position on the board. Signed so that out-of-bounds candidates
/// (one step past an edge) are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// A cell reference: coordinates plus the identifier derived from them.
/// The id is always computed by the [`Board`], never assigned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coords: Coords,
    pub id: CellId,
}

/// Immutable addressing structure for a square N×N board. Maps
/// coordinates to cell identifiers and provides bounds checking; holds
/// no game state.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
}

impl Board {
    pub fn new(size: i32) -> Result<Self, GameError> {
        if size <= 0 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Highest cell identifier on this board (`size * size`).
    pub fn max_cell(&self) -> CellId {
        (self.size * self.size) as CellId
    }

    /// One unit step from `coords` in `direction`. The result may be out
    /// of bounds; callers check with [`is_out_of_bounds`](Self::is_out_of_bounds).
    pub fn coords_in_direction(&self, coords: Coords, direction: Direction) -> Coords {
        let (row, col) = direction.delta();
        Coords::new(coords.row + row, coords.col + col)
    }

    pub fn is_out_of_bounds(&self, coords: Coords) -> bool {
        coords.row < 0 || coords.col < 0 || coords.row >= self.size || coords.col >= self.size
    }

    /// Row-major identifier of in-bounds coordinates.
    pub fn cell_id(&self, coords: Coords) -> CellId {
        debug_assert!(!self.is_out_of_bounds(coords));
        (coords.row * self.size + coords.col + 1) as CellId
    }

    pub fn cell(&self, coords: Coords) -> Cell {
        Cell {
            coords,
            id: self.cell_id(coords),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_non_positive_sizes() {
        assert_eq!(Board::new(0).unwrap_err(), GameError::InvalidSize(0));
        assert_eq!(Board::new(-3).unwrap_err(), GameError::InvalidSize(-3));
        assert!(Board::new(1).is_ok());
    }

    #[test]
    fn test_ids_are_unique_and_dense() {
        for size in [1, 2, 5, 8] {
            let board = Board::new(size).unwrap();
            let mut seen = HashSet::new();
            for row in 0..size {
                for col in 0..size {
                    let id = board.cell_id(Coords::new(row, col));
                    assert!(id >= 1 && id <= board.max_cell());
                    assert!(seen.insert(id), "duplicate id {id} on size {size}");
                }
            }
            assert_eq!(seen.len(), (size * size) as usize);
        }
    }

    #[test]
    fn test_row_major_identifier_formula() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.cell_id(Coords::new(0, 0)), 1);
        assert_eq!(board.cell_id(Coords::new(0, 4)), 5);
        assert_eq!(board.cell_id(Coords::new(2, 2)), 12);
        assert_eq!(board.cell_id(Coords::new(4, 4)), 25);
    }

    #[test]
    fn test_unit_steps() {
        let board = Board::new(5).unwrap();
        let center = Coords::new(2, 2);
        assert_eq!(board.coords_in_direction(center, Direction::Up), Coords::new(1, 2));
        assert_eq!(board.coords_in_direction(center, Direction::Down), Coords::new(3, 2));
        assert_eq!(board.coords_in_direction(center, Direction::Left), Coords::new(2, 1));
        assert_eq!(board.coords_in_direction(center, Direction::Right), Coords::new(2, 3));
    }

    #[test]
    fn test_bounds_checking() {
        let board = Board::new(5).unwrap();
        assert!(!board.is_out_of_bounds(Coords::new(0, 0)));
        assert!(!board.is_out_of_bounds(Coords::new(4, 4)));
        assert!(board.is_out_of_bounds(Coords::new(-1, 0)));
        assert!(board.is_out_of_bounds(Coords::new(0, -1)));
        assert!(board.is_out_of_bounds(Coords::new(5, 0)));
        assert!(board.is_out_of_bounds(Coords::new(0, 5)));
    }
}
