//! Per-side ship records and the ships-remaining count.

use crate::common::GameError;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Placement, Ship, ShipId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
    ships_remaining: usize,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    /// Five unplaced ships at full health.
    pub fn new() -> Self {
        Self {
            ships: core::array::from_fn(|i| Ship::new(SHIPS[i])),
            ships_remaining: NUM_SHIPS,
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, GameError> {
        self.ships.get(id).ok_or(GameError::InvalidShip(id))
    }

    /// Ships not yet destroyed.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn all_destroyed(&self) -> bool {
        self.ships_remaining == 0
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    pub(crate) fn record_placement(
        &mut self,
        id: ShipId,
        placement: Placement,
    ) -> Result<(), GameError> {
        let ship = self.ships.get_mut(id).ok_or(GameError::InvalidShip(id))?;
        if ship.is_placed() {
            return Err(GameError::ShipAlreadyPlaced(id));
        }
        ship.set_placement(placement);
        Ok(())
    }

    /// Apply one hit to `id`. Returns `true` when that hit destroyed it.
    pub(crate) fn register_hit(&mut self, id: ShipId) -> Result<bool, GameError> {
        let ship = self.ships.get_mut(id).ok_or(GameError::InvalidShip(id))?;
        if !ship.take_hit() {
            return Ok(false);
        }
        assert!(self.ships_remaining > 0, "ships remaining underflow");
        self.ships_remaining -= 1;
        Ok(true)
    }

    pub(crate) fn clear(&mut self) {
        self.ships.iter_mut().for_each(Ship::reset);
        self.ships_remaining = NUM_SHIPS;
    }
}
