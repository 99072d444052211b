//! Commonly used types and utilities for ease of import.

pub use crate::{
    Game, GameError, GameEvent, Intent, Orientation, Phase, Placement, Presenter, ShotResult, Side,
    TurnController,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameSnapshot, Session};
