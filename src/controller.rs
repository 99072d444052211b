//! Turn controller: applies host intents to the game state machine and
//! schedules the opponent's reply.
//!
//! The controller never waits. After an accepted player shot it hands the
//! host a [`ScheduledMove`]; the host runs it with
//! [`TurnController::run_opponent_move`] once the delay has passed. Tickets
//! make cancelled or stale requests harmless.

use core::time::Duration;

use log::{debug, warn};
use rand::Rng;

use crate::{
    combat,
    common::{GameError, ShotResult, Side},
    config::{NUM_SHIPS, OPPONENT_MOVE_DELAY, SHIPS},
    domain::GameSnapshot,
    events::{GameEvent, Presenter, ScheduledMove},
    game::{Game, Phase},
    ship::{Orientation, Placement},
};

/// Discrete input from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    OpenGame,
    /// The opening presentation has finished.
    OpeningFinished,
    RotatePlacement,
    PlaceShip { x: usize, y: usize },
    Fire { x: usize, y: usize },
    RequestRematch,
    /// The closing presentation has finished.
    ClosingFinished,
    Quit,
}

pub struct TurnController<R: Rng, P: Presenter> {
    game: Game,
    rng: R,
    presenter: P,
    orientation: Orientation,
    pending: Option<ScheduledMove>,
    next_ticket: u64,
    opponent_delay: Duration,
}

impl<R: Rng, P: Presenter> TurnController<R, P> {
    pub fn new(rng: R, presenter: P) -> Self {
        Self {
            game: Game::new(),
            rng,
            presenter,
            orientation: Orientation::default(),
            pending: None,
            next_ticket: 0,
            opponent_delay: OPPONENT_MOVE_DELAY,
        }
    }

    /// Override the pause before the opponent's reply.
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Orientation used for the next player placement.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Full view of the current state, opponent board included.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.game).with_orientation(self.orientation)
    }

    /// The opponent move waiting to run, if any.
    pub fn pending_opponent_move(&self) -> Option<ScheduledMove> {
        self.pending
    }

    /// Apply one intent. Rejected intents leave the state untouched.
    pub fn handle(&mut self, intent: Intent) -> Result<(), GameError> {
        match intent {
            Intent::OpenGame => self.open_game(),
            Intent::OpeningFinished => self.opening_finished(),
            Intent::RotatePlacement => self.rotate_placement().map(|_| ()),
            Intent::PlaceShip { x, y } => self.attempt_place_ship(x, y),
            Intent::Fire { x, y } => self.attempt_fire(x, y).map(|_| ()),
            Intent::RequestRematch => self.request_rematch(),
            Intent::ClosingFinished => self.closing_finished(),
            Intent::Quit => {
                self.quit();
                Ok(())
            }
        }
    }

    /// `Closed -> Opening`. The opponent fleet is placed here, hidden for the
    /// whole of the player's setup.
    pub fn open_game(&mut self) -> Result<(), GameError> {
        self.require(matches!(self.game.phase(), Phase::Closed))?;
        self.start_fresh_game()
    }

    /// `Opening -> PlacingShip(0)`.
    pub fn opening_finished(&mut self) -> Result<(), GameError> {
        self.require(matches!(self.game.phase(), Phase::Opening))?;
        self.set_phase(Phase::PlacingShip(0));
        Ok(())
    }

    /// Flip the orientation of the ship being placed.
    pub fn rotate_placement(&mut self) -> Result<Orientation, GameError> {
        self.require(matches!(self.game.phase(), Phase::PlacingShip(_)))?;
        self.orientation = self.orientation.rotated();
        self.presenter.notify(GameEvent::PlacementRotated(self.orientation));
        Ok(self.orientation)
    }

    /// Place the current ship with its bow at `(x, y)`. An illegal placement
    /// is rejected and the same ship stays up for placement.
    pub fn attempt_place_ship(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        let ship = match self.game.phase() {
            Phase::PlacingShip(ship) => ship,
            _ => return self.reject(GameError::InvalidPhaseAction),
        };
        let placement = Placement::new(x, y, self.orientation);
        if let Err(e) = self.game.place_ship(Side::Player, ship, placement) {
            return self.reject(e);
        }
        self.presenter.notify(GameEvent::ShipPlaced {
            side: Side::Player,
            ship,
            placement,
        });
        if ship + 1 < NUM_SHIPS {
            self.set_phase(Phase::PlacingShip(ship + 1));
        } else {
            self.set_phase(Phase::SetupComplete);
            self.set_phase(Phase::Combat);
        }
        Ok(())
    }

    /// Fire at the opponent's `(x, y)`. Only allowed during combat, on an
    /// even turn, with no opponent reply outstanding.
    pub fn attempt_fire(&mut self, x: usize, y: usize) -> Result<ShotResult, GameError> {
        let allowed = self.game.phase() == Phase::Combat
            && self.game.winner().is_none()
            && self.game.is_player_turn()
            && self.pending.is_none();
        if !allowed {
            return self.reject(GameError::InvalidPhaseAction);
        }
        let result = match self.game.fire(Side::Opponent, x, y) {
            Ok(result) => result,
            Err(e) => return self.reject(e),
        };
        self.report_shot(Side::Opponent, x, y, result);
        if self.game.winner().is_none() {
            self.schedule_opponent_move();
        }
        Ok(result)
    }

    /// Run the opponent's reply for `ticket`. Returns `Ok(None)` when the
    /// ticket is no longer current or the game has moved on.
    pub fn run_opponent_move(&mut self, ticket: u64) -> Result<Option<ShotResult>, GameError> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => self.pending = None,
            _ => {
                debug!("ignoring stale opponent move {}", ticket);
                return Ok(None);
            }
        }
        if self.game.phase() != Phase::Combat || self.game.winner().is_some() {
            return Ok(None);
        }
        let ((x, y), result) = combat::opponent_move(&mut self.game, &mut self.rng)?;
        self.report_shot(Side::Player, x, y, result);
        Ok(Some(result))
    }

    /// `Terminal -> Closing`.
    pub fn request_rematch(&mut self) -> Result<(), GameError> {
        self.require(matches!(self.game.phase(), Phase::Terminal(_)))?;
        self.cancel_opponent_move();
        self.set_phase(Phase::Closing);
        Ok(())
    }

    /// `Closing -> Opening`, with all state cleared and a fresh opponent fleet.
    pub fn closing_finished(&mut self) -> Result<(), GameError> {
        self.require(matches!(self.game.phase(), Phase::Closing))?;
        self.start_fresh_game()
    }

    /// Tear the session down to `Closed`, cancelling any pending reply.
    pub fn quit(&mut self) {
        self.cancel_opponent_move();
        if self.game.phase() != Phase::Closed {
            self.set_phase(Phase::Closed);
        }
    }

    fn start_fresh_game(&mut self) -> Result<(), GameError> {
        self.cancel_opponent_move();
        self.game.reset();
        self.orientation = Orientation::default();
        let placements = self.game.place_fleet_randomly(Side::Opponent, &mut self.rng)?;
        for (ship, placement) in placements.into_iter().enumerate() {
            self.presenter.notify(GameEvent::ShipPlaced {
                side: Side::Opponent,
                ship,
                placement,
            });
        }
        self.set_phase(Phase::Opening);
        Ok(())
    }

    fn schedule_opponent_move(&mut self) {
        if let Some(pending) = self.pending {
            warn!("opponent move {} already scheduled", pending.ticket);
            return;
        }
        let scheduled = ScheduledMove {
            ticket: self.next_ticket,
            delay: self.opponent_delay,
        };
        self.next_ticket += 1;
        self.pending = Some(scheduled);
        self.presenter.notify(GameEvent::OpponentMoveScheduled(scheduled));
    }

    fn cancel_opponent_move(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("cancelling opponent move {}", pending.ticket);
            self.presenter.notify(GameEvent::OpponentMoveCancelled {
                ticket: pending.ticket,
            });
        }
    }

    fn report_shot(&mut self, target: Side, x: usize, y: usize, result: ShotResult) {
        self.presenter.notify(GameEvent::ShotResolved { target, x, y, result });
        if let ShotResult::Destroyed(ship) = result {
            debug!("{:?} {} destroyed", target, SHIPS[ship].name());
            self.presenter.notify(GameEvent::ShipDestroyed { side: target, ship });
        }
        if let Some(winner) = self.game.winner() {
            self.presenter.notify(GameEvent::PhaseChanged(self.game.phase()));
            self.presenter.notify(GameEvent::GameOver { winner });
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        self.game.set_phase(phase);
        self.presenter.notify(GameEvent::PhaseChanged(phase));
    }

    fn require(&self, allowed: bool) -> Result<(), GameError> {
        if allowed {
            Ok(())
        } else {
            self.reject(GameError::InvalidPhaseAction)
        }
    }

    fn reject<T>(&self, err: GameError) -> Result<T, GameError> {
        debug!("rejected in {:?}: {}", self.game.phase(), err);
        Err(err)
    }
}
