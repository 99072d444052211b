use core::time::Duration;

use crate::ship::{ShipId, ShipType};

pub const BOARD_SIZE: usize = 10;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Index of the smallest ship, placed last during setup.
pub const PATROL_BOAT: ShipId = 4;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Pause between an accepted player shot and the opponent's reply.
pub const OPPONENT_MOVE_DELAY: Duration = Duration::from_millis(650);

/// Upper bound on rejection-sampling attempts when placing one ship at random.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Look up the ship type for `id`, if it names one of the configured ships.
pub fn ship_type(id: ShipId) -> Option<ShipType> {
    SHIPS.get(id).copied()
}
