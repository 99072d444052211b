//! Notifications sent to the presentation layer.

use core::time::Duration;

use log::{debug, info};

use crate::common::{ShotResult, Side};
use crate::game::Phase;
use crate::ship::{Orientation, Placement, ShipId};

/// A deferred opponent move requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledMove {
    /// Identifies this request; only the current ticket may run.
    pub ticket: u64,
    /// How long the host should wait before running it.
    pub delay: Duration,
}

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    PhaseChanged(Phase),
    /// Orientation used for the next player placement.
    PlacementRotated(Orientation),
    ShipPlaced {
        side: Side,
        ship: ShipId,
        placement: Placement,
    },
    ShotResolved {
        target: Side,
        x: usize,
        y: usize,
        result: ShotResult,
    },
    /// Ship sunk; its model can now be revealed.
    ShipDestroyed { side: Side, ship: ShipId },
    GameOver { winner: Side },
    OpponentMoveScheduled(ScheduledMove),
    OpponentMoveCancelled { ticket: u64 },
}

/// Receiver of [`GameEvent`]s.
pub trait Presenter {
    fn notify(&mut self, event: GameEvent);
}

/// Discards every event.
impl Presenter for () {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Records events in order.
#[cfg(feature = "std")]
impl Presenter for std::vec::Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::ShotResolved { target, x, y, result } => {
                info!("shot at {:?} ({}, {}): {:?}", target, x, y, result)
            }
            GameEvent::ShipDestroyed { side, ship } => info!("{:?} ship {} destroyed", side, ship),
            GameEvent::GameOver { winner } => info!("{:?} wins", winner),
            other => debug!("{:?}", other),
        }
    }
}
