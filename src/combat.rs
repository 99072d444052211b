//! Shot resolution and the opponent's targeting.

use rand::Rng;

use crate::board::Board;
use crate::common::{GameError, ShotResult, Side};
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::game::Game;

/// Resolve a shot at `(x, y)` on `board`.
///
/// A cell that was already hit is rejected with [`GameError::RepeatShot`]
/// and nothing changes. Otherwise the cell is marked hit and, if a ship sits
/// there, that ship loses a hit point.
pub fn fire(board: &mut Board, x: usize, y: usize) -> Result<ShotResult, GameError> {
    let cell = board.grid().cell(x, y)?;
    if cell.was_hit() {
        return Err(GameError::RepeatShot { x, y });
    }
    let (grid, fleet) = board.parts_mut();
    grid.mark_hit(x, y)?;
    match cell.ship() {
        None => Ok(ShotResult::Miss),
        Some(id) if fleet.register_hit(id)? => Ok(ShotResult::Destroyed(id)),
        Some(id) => Ok(ShotResult::Hit(id)),
    }
}

/// The opponent's shot at the player: sample cells uniformly, drawing again
/// whenever the sample was already hit, until a shot is accepted.
pub fn opponent_move<R: Rng + ?Sized>(
    game: &mut Game,
    rng: &mut R,
) -> Result<((usize, usize), ShotResult), GameError> {
    if game.board(Side::Player).grid().hit_count() == CELL_COUNT {
        return Err(GameError::BoardExhausted);
    }
    loop {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        match game.fire(Side::Player, x, y) {
            Ok(result) => return Ok(((x, y), result)),
            Err(GameError::RepeatShot { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
}
