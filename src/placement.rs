//! Placement validation plus player-directed and randomized placement.
//!
//! Both placement paths go through [`can_place`], so the opponent's random
//! fleet obeys exactly the rules applied to the player's input.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{ship_type, BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipId};

/// Whether a ship of `length` fits at `placement` without leaving the board
/// or touching an occupied cell.
pub fn can_place(grid: &Grid, placement: Placement, length: usize) -> bool {
    placement
        .cells(length)
        .all(|(x, y)| matches!(grid.is_occupied(x, y), Ok(false)))
}

/// Write `ship` onto the board at `placement`.
///
/// Does not re-check the grid: callers validate with [`can_place`] first.
pub fn place_ship(
    board: &mut Board,
    ship: ShipId,
    placement: Placement,
) -> Result<(), GameError> {
    let def = ship_type(ship).ok_or(GameError::InvalidShip(ship))?;
    debug_assert!(can_place(board.grid(), placement, def.length()));
    let (grid, fleet) = board.parts_mut();
    fleet.record_placement(ship, placement)?;
    for (x, y) in placement.cells(def.length()) {
        grid.set_ship(x, y, ship)?;
    }
    Ok(())
}

/// Place `ship` at a uniformly sampled legal anchor and orientation.
pub fn place_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    ship: ShipId,
) -> Result<Placement, GameError> {
    let length = ship_type(ship).ok_or(GameError::InvalidShip(ship))?.length();
    if board.fleet().ship(ship)?.is_placed() {
        return Err(GameError::ShipAlreadyPlaced(ship));
    }
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let max_x = if orientation.is_vertical() {
            BOARD_SIZE - 1
        } else {
            BOARD_SIZE - length
        };
        let max_y = if orientation.is_vertical() {
            BOARD_SIZE - length
        } else {
            BOARD_SIZE - 1
        };
        let placement = Placement::new(
            rng.random_range(0..=max_x),
            rng.random_range(0..=max_y),
            orientation,
        );
        if can_place(board.grid(), placement, length) {
            place_ship(board, ship, placement)?;
            debug!("ship {} placed at {:?} after {} attempt(s)", ship, placement, attempt);
            return Ok(placement);
        }
    }
    Err(GameError::PlacementExhausted {
        ship,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Randomly place every ship of the fleet, largest first.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<[Placement; NUM_SHIPS], GameError> {
    let mut placements = [Placement::new(0, 0, Orientation::Horizontal); NUM_SHIPS];
    for (ship, slot) in placements.iter_mut().enumerate() {
        *slot = place_randomly(board, rng, ship)?;
    }
    Ok(placements)
}
