#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
pub mod combat;
mod common;
mod config;
pub mod controller;
pub mod domain;
mod events;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::{Intent, TurnController};
pub use domain::{BoardView, CellView, GameSnapshot, ShipView};
pub use events::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{can_place, place_fleet_randomly, place_randomly, place_ship};
#[cfg(feature = "std")]
pub use session::Session;
pub use ship::*;
