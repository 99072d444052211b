use log::info;
use rand::Rng;

use crate::{
    board::Board,
    combat,
    common::{GameError, ShotResult, Side},
    config::{ship_type, NUM_SHIPS},
    placement,
    ship::{Orientation, Placement, ShipId},
};

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No game open.
    #[default]
    Closed,
    /// Opponent fleet placed; waiting for the opening presentation.
    Opening,
    /// Player is placing the ship with this index.
    PlacingShip(ShipId),
    /// Player fleet complete; combat starts immediately.
    SetupComplete,
    Combat,
    /// Game over with the given winner.
    Terminal(Side),
    /// Waiting for the closing presentation before a rematch.
    Closing,
}

/// Authoritative game state: both boards, turn counter, winner and phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    boards: [Board; 2],
    turn: u32,
    winner: Option<Side>,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A closed game with empty boards.
    pub fn new() -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            turn: 0,
            winner: None,
            phase: Phase::Closed,
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub(crate) fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Number of accepted shots so far, from both sides.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Even turns belong to the player, odd turns to the opponent.
    pub fn is_player_turn(&self) -> bool {
        self.turn % 2 == 0
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        info!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    pub fn is_occupied(&self, side: Side, x: usize, y: usize) -> Result<bool, GameError> {
        self.board(side).grid().is_occupied(x, y)
    }

    pub fn occupying_ship(
        &self,
        side: Side,
        x: usize,
        y: usize,
    ) -> Result<Option<ShipId>, GameError> {
        self.board(side).grid().occupying_ship(x, y)
    }

    pub fn was_hit(&self, side: Side, x: usize, y: usize) -> Result<bool, GameError> {
        self.board(side).grid().was_hit(x, y)
    }

    /// Whether a ship of `length` fits on `side`'s board at `(x, y)`.
    pub fn can_place(
        &self,
        side: Side,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        placement::can_place(self.board(side).grid(), Placement::new(x, y, orientation), length)
    }

    /// Place `ship` on `side`'s board after checking that it fits.
    pub fn place_ship(
        &mut self,
        side: Side,
        ship: ShipId,
        placement: Placement,
    ) -> Result<(), GameError> {
        let length = ship_type(ship).ok_or(GameError::InvalidShip(ship))?.length();
        if !placement::can_place(self.board(side).grid(), placement, length) {
            return Err(GameError::IllegalPlacement);
        }
        placement::place_ship(self.board_mut(side), ship, placement)
    }

    /// Randomly place all five ships on `side`'s board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        rng: &mut R,
    ) -> Result<[Placement; NUM_SHIPS], GameError> {
        placement::place_fleet_randomly(self.board_mut(side), rng)
    }

    /// Fire at `(x, y)` on `target`'s board.
    ///
    /// An accepted shot advances the turn counter. Destroying the target's
    /// last ship makes the firing side the winner and ends the game. Once a
    /// winner is decided every further shot is refused.
    pub fn fire(&mut self, target: Side, x: usize, y: usize) -> Result<ShotResult, GameError> {
        if self.winner.is_some() {
            return Err(GameError::InvalidPhaseAction);
        }
        let result = combat::fire(self.board_mut(target), x, y)?;
        self.turn += 1;
        if let ShotResult::Destroyed(ship) = result {
            info!("{:?} lost its {}", target, self.board(target).fleet().ship(ship)?.name());
            if self.board(target).fleet().all_destroyed() {
                let winner = target.opponent();
                self.winner = Some(winner);
                self.set_phase(Phase::Terminal(winner));
            }
        }
        Ok(result)
    }

    /// `true` if a shot at `(x, y)` was accepted, `false` for a repeat or
    /// off-board target.
    pub fn fire_accepted(&mut self, target: Side, x: usize, y: usize) -> bool {
        self.fire(target, x, y).is_ok()
    }

    /// Clear boards, turn counter and winner in place. The phase is left to
    /// the caller.
    pub fn reset(&mut self) {
        self.boards.iter_mut().for_each(Board::clear);
        self.turn = 0;
        self.winner = None;
    }
}
