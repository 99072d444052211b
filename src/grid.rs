//! Per-side 10x10 cell grid: occupancy, owning ship and hit status.

use core::fmt;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::ship::ShipId;

/// State of a single cell. Occupied exactly when a ship id is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    hit: bool,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }

    /// Ship occupying this cell.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn was_hit(&self) -> bool {
        self.hit
    }
}

/// Flat row-major array of cells for one side.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// All cells unoccupied and unhit.
    pub fn new() -> Self {
        Self {
            cells: [Cell::default(); CELL_COUNT],
        }
    }

    #[inline]
    fn index(x: usize, y: usize) -> Result<usize, GameError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            Err(GameError::OutOfBounds { x, y })
        } else {
            Ok(y * BOARD_SIZE + x)
        }
    }

    /// Whether `(x, y)` lies on the board.
    pub fn in_bounds(x: usize, y: usize) -> bool {
        Self::index(x, y).is_ok()
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        Ok(self.cells[Self::index(x, y)?])
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.cell(x, y)?.is_occupied())
    }

    pub fn occupying_ship(&self, x: usize, y: usize) -> Result<Option<ShipId>, GameError> {
        Ok(self.cell(x, y)?.ship())
    }

    pub fn was_hit(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.cell(x, y)?.was_hit())
    }

    /// Mark `(x, y)` as hit. Callers check [`Grid::was_hit`] first.
    pub fn mark_hit(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        let idx = Self::index(x, y)?;
        debug_assert!(!self.cells[idx].hit, "cell ({}, {}) hit twice", x, y);
        self.cells[idx].hit = true;
        Ok(())
    }

    /// Record `ship` as occupying `(x, y)`. The cell must be empty.
    pub fn set_ship(&mut self, x: usize, y: usize, ship: ShipId) -> Result<(), GameError> {
        let idx = Self::index(x, y)?;
        debug_assert!(self.cells[idx].ship.is_none(), "cell ({}, {}) already occupied", x, y);
        self.cells[idx].ship = Some(ship);
        Ok(())
    }

    /// Reset every cell to unoccupied and unhit.
    pub fn clear(&mut self) {
        self.cells = [Cell::default(); CELL_COUNT];
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.was_hit()).count()
    }

    /// Iterator over `((x, y), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| ((idx % BOARD_SIZE, idx / BOARD_SIZE), *cell))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let cell = self.cells[y * BOARD_SIZE + x];
                let ch = match (cell.is_occupied(), cell.was_hit()) {
                    (true, true) => 'X',
                    (false, true) => 'o',
                    (true, false) => '■',
                    (false, false) => '□',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
