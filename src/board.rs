//! One side's board: the cell grid plus the fleet sailing on it.

use crate::fleet::Fleet;
use crate::grid::Grid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
}

impl Board {
    /// Create an empty board (no ships placed, nothing hit).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Grid, &mut Fleet) {
        (&mut self.grid, &mut self.fleet)
    }

    /// Return every cell and ship to its initial state in place.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.fleet.clear();
    }
}
