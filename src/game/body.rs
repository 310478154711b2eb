use std::collections::{HashSet, VecDeque};

use super::board::{Cell, CellId};

/// The moving body: an ordered chain of cells with the head at the front
/// and the tail (oldest cell) at the back, plus a mirrored set of cell
/// identifiers for O(1) membership checks.
///
/// Every method that mutates the chain updates the set in the same call,
/// so the two can never drift apart. The chain never holds duplicate ids
/// while longer than one cell; the engine's collision check guarantees
/// that before calling [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct Body {
    chain: VecDeque<Cell>,
    occupied: HashSet<CellId>,
}

impl Body {
    pub fn new(start: Cell) -> Self {
        let mut chain = VecDeque::new();
        let mut occupied = HashSet::new();
        chain.push_front(start);
        occupied.insert(start.id);
        Self { chain, occupied }
    }

    pub fn head(&self) -> Cell {
        *self.chain.front().expect("body is never empty")
    }

    pub fn tail(&self) -> Cell {
        *self.chain.back().expect("body is never empty")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Add a new head cell. Always called on a move; length only shrinks
    /// through [`evict_tail`](Self::evict_tail), which ordinary moves
    /// pair with this and growth moves skip.
    pub fn advance(&mut self, new_head: Cell) {
        self.chain.push_front(new_head);
        self.occupied.insert(new_head.id);
    }

    /// Release the oldest cell, removing it from the occupied set.
    pub fn evict_tail(&mut self) -> Cell {
        let tail = self.chain.pop_back().expect("body is never empty");
        self.occupied.remove(&tail.id);
        tail
    }

    /// Reverse the chain end-to-end, swapping head and tail roles. The
    /// occupied set is untouched: the cells are the same, only their
    /// order changes.
    pub fn reverse(&mut self) {
        self.chain.make_contiguous().reverse();
    }

    /// O(1) membership test via the occupied set.
    pub fn contains(&self, id: CellId) -> bool {
        self.occupied.contains(&id)
    }

    pub fn occupied(&self) -> &HashSet<CellId> {
        &self.occupied
    }

    /// The chain neighbor of the tail (second-oldest cell), if the body
    /// is longer than one cell. Used to infer the tail's direction of
    /// travel for the reversal mechanic.
    pub fn neighbor_of_tail(&self) -> Option<Cell> {
        if self.chain.len() < 2 {
            return None;
        }
        self.chain.get(self.chain.len() - 2).copied()
    }

    /// Cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.chain.iter()
    }
}
