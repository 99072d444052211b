//! Read-only, serializable views of the game for rendering and inspection.

#[cfg(not(feature = "std"))]
use alloc::{string::{String, ToString}, vec::Vec};
#[cfg(feature = "std")]
use std::{string::{String, ToString}, vec::Vec};

use crate::{
    board::Board,
    common::Side,
    game::{Game, Phase},
    ship::{Orientation, Placement, Ship},
};

/// One cell as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub occupied: bool,
    pub hit: bool,
    pub ship: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipView {
    pub name: String,
    pub length: usize,
    pub hit_points: usize,
    pub placed: bool,
    pub destroyed: bool,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    /// Row-major cells, index `y * BOARD_SIZE + x`.
    pub cells: Vec<CellView>,
    pub ships: Vec<ShipView>,
    pub ships_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub phase: Phase,
    pub turn: u32,
    pub winner: Option<Side>,
    /// Orientation for the next player placement.
    pub orientation: Orientation,
    pub player: BoardView,
    pub opponent: BoardView,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        ShipView {
            name: ship.name().to_string(),
            length: ship.length(),
            hit_points: ship.hit_points(),
            placed: ship.is_placed(),
            destroyed: ship.is_destroyed(),
            placement: ship.placement(),
        }
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        BoardView {
            cells: board
                .grid()
                .iter()
                .map(|(_, cell)| CellView {
                    occupied: cell.is_occupied(),
                    hit: cell.was_hit(),
                    ship: cell.ship(),
                })
                .collect(),
            ships: board.fleet().ships().iter().map(ShipView::from).collect(),
            ships_remaining: board.fleet().ships_remaining(),
        }
    }
}

impl BoardView {
    /// Cell at `(x, y)`, if on the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellView> {
        if x >= crate::config::BOARD_SIZE {
            return None;
        }
        self.cells.get(y * crate::config::BOARD_SIZE + x).copied()
    }

    /// Hide everything an enemy could not see: unhit occupancy and ships
    /// that are still afloat.
    pub fn concealed(&self) -> BoardView {
        let cells = self
            .cells
            .iter()
            .map(|c| {
                let revealed = c.hit
                    && c.ship
                        .and_then(|id| self.ships.get(id))
                        .map_or(false, |s| s.destroyed);
                CellView {
                    occupied: c.occupied && c.hit,
                    hit: c.hit,
                    ship: if revealed { c.ship } else { None },
                }
            })
            .collect();
        let ships = self
            .ships
            .iter()
            .map(|s| ShipView {
                placement: if s.destroyed { s.placement } else { None },
                ..s.clone()
            })
            .collect();
        BoardView {
            cells,
            ships,
            ships_remaining: self.ships_remaining,
        }
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            phase: game.phase(),
            turn: game.turn(),
            winner: game.winner(),
            orientation: Orientation::default(),
            player: BoardView::from(game.board(Side::Player)),
            opponent: BoardView::from(game.board(Side::Opponent)),
        }
    }
}

impl GameSnapshot {
    /// Snapshot with the placement orientation filled in.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The player's view: own board in full, opponent board concealed.
    pub fn concealed(&self) -> GameSnapshot {
        GameSnapshot {
            opponent: self.opponent.concealed(),
            ..self.clone()
        }
    }
}
