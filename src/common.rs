//! Common types for the rules engine: sides, shot results and errors.

use crate::ship::ShipId;

/// One of the two fleets in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The side this one is fighting against.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit(ShipId),
    /// Shot removed the last hit point of a ship.
    Destroyed(ShipId),
}

impl ShotResult {
    /// Ship struck by the shot, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotResult::Miss => None,
            ShotResult::Hit(id) | ShotResult::Destroyed(id) => Some(id),
        }
    }
}

/// Errors returned by rules operations. None of them end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Ship does not fit or overlaps another ship.
    IllegalPlacement,
    /// Target cell was already hit.
    RepeatShot { x: usize, y: usize },
    /// Action not permitted in the current phase.
    InvalidPhaseAction,
    /// Ship index does not name a configured ship.
    InvalidShip(ShipId),
    /// Ship already has a position on this board.
    ShipAlreadyPlaced(ShipId),
    /// Random placement gave up after the configured number of attempts.
    PlacementExhausted { ship: ShipId, attempts: usize },
    /// Every cell of the target board has already been hit.
    BoardExhausted,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is off the board", x, y)
            }
            GameError::IllegalPlacement => write!(f, "Ship does not fit at that position"),
            GameError::RepeatShot { x, y } => {
                write!(f, "Cell ({}, {}) was already fired upon", x, y)
            }
            GameError::InvalidPhaseAction => write!(f, "Action is not allowed right now"),
            GameError::InvalidShip(id) => write!(f, "No ship with index {}", id),
            GameError::ShipAlreadyPlaced(id) => write!(f, "Ship {} is already placed", id),
            GameError::PlacementExhausted { ship, attempts } => {
                write!(f, "Unable to place ship {} after {} attempts", ship, attempts)
            }
            GameError::BoardExhausted => write!(f, "No unhit cells remain on the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
