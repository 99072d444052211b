#![cfg(feature = "std")]

//! Async driver that owns a [`TurnController`] and turns its scheduled
//! opponent moves into real timers.

use log::{debug, info};
use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};

use crate::controller::{Intent, TurnController};
use crate::domain::GameSnapshot;
use crate::events::Presenter;

/// Single owner of the game state.
///
/// Intents arrive on an `mpsc` channel and are applied one at a time. A
/// scheduled opponent move arms a deadline that is raced against further
/// input with `select!`, so the task never blocks while the opponent
/// "thinks". A fresh [`GameSnapshot`] is published on a `watch` channel
/// after every step for read-only observers.
pub struct Session<R: Rng, P: Presenter> {
    controller: TurnController<R, P>,
    snapshots: watch::Sender<GameSnapshot>,
}

impl<R: Rng, P: Presenter> Session<R, P> {
    /// Wrap `controller`, returning the session and a snapshot receiver.
    pub fn new(controller: TurnController<R, P>) -> (Self, watch::Receiver<GameSnapshot>) {
        let (snapshots, rx) = watch::channel(controller.snapshot());
        (
            Self {
                controller,
                snapshots,
            },
            rx,
        )
    }

    /// Process intents until `Quit` arrives or every sender is dropped.
    /// Either way any pending opponent move is cancelled before returning
    /// the controller.
    pub async fn run(
        mut self,
        mut intents: mpsc::Receiver<Intent>,
    ) -> anyhow::Result<TurnController<R, P>> {
        let mut armed: Option<(u64, Instant)> = None;
        loop {
            armed = match (self.controller.pending_opponent_move(), armed) {
                (Some(pending), Some((ticket, deadline))) if pending.ticket == ticket => {
                    Some((ticket, deadline))
                }
                (Some(pending), _) => Some((pending.ticket, Instant::now() + pending.delay)),
                (None, _) => None,
            };
            let deadline = armed.map(|(_, deadline)| deadline);

            tokio::select! {
                intent = intents.recv() => match intent {
                    Some(Intent::Quit) | None => {
                        info!("session closing");
                        self.controller.quit();
                        self.publish();
                        break;
                    }
                    Some(intent) => {
                        if let Err(e) = self.controller.handle(intent) {
                            debug!("ignored {:?}: {}", intent, e);
                        }
                    }
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some((ticket, _)) = armed.take() {
                        self.controller.run_opponent_move(ticket)?;
                    }
                }
            }
            self.publish();
        }
        Ok(self.controller)
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.controller.snapshot());
    }
}
