use battleship_solo::{
    place_ship, Board, Fleet, GameError, Grid, Orientation, Placement, NUM_SHIPS, SHIPS,
};

#[test]
fn test_fresh_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.hit_count(), 0);
    for ((x, y), cell) in grid.iter() {
        assert!(x < 10 && y < 10);
        assert!(!cell.is_occupied());
        assert!(!cell.was_hit());
        assert_eq!(cell.ship(), None);
    }
}

#[test]
fn test_out_of_bounds_queries_fail() {
    let grid = Grid::new();
    assert_eq!(grid.is_occupied(10, 0), Err(GameError::OutOfBounds { x: 10, y: 0 }));
    assert_eq!(grid.is_occupied(0, 10), Err(GameError::OutOfBounds { x: 0, y: 10 }));
    assert_eq!(grid.was_hit(usize::MAX, 3), Err(GameError::OutOfBounds { x: usize::MAX, y: 3 }));
    assert!(grid.is_occupied(9, 9).is_ok());
}

#[test]
fn test_set_ship_marks_occupancy_and_owner() {
    let mut grid = Grid::new();
    grid.set_ship(3, 7, 2).unwrap();
    assert_eq!(grid.is_occupied(3, 7), Ok(true));
    assert_eq!(grid.occupying_ship(3, 7), Ok(Some(2)));
    assert_eq!(grid.occupying_ship(7, 3), Ok(None));

    grid.mark_hit(3, 7).unwrap();
    assert_eq!(grid.was_hit(3, 7), Ok(true));

    grid.clear();
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_fleet_starts_unplaced_at_full_health() {
    let fleet = Fleet::new();
    assert_eq!(fleet.ships_remaining(), NUM_SHIPS);
    assert!(!fleet.all_placed());
    for (ship, def) in fleet.ships().iter().zip(SHIPS.iter()) {
        assert_eq!(ship.length(), def.length());
        assert_eq!(ship.hit_points(), def.length());
        assert!(!ship.is_placed());
        assert!(!ship.is_destroyed());
    }
    assert_eq!(fleet.ship(NUM_SHIPS).unwrap_err(), GameError::InvalidShip(NUM_SHIPS));
}

#[test]
fn test_board_clear_restores_initial_state() {
    let mut board = Board::new();
    place_ship(&mut board, 1, Placement::new(2, 2, Orientation::Vertical)).unwrap();
    battleship_solo::combat::fire(&mut board, 2, 3).unwrap();
    assert_ne!(board, Board::new());

    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_placing_same_ship_twice_is_refused() {
    let mut board = Board::new();
    place_ship(&mut board, 0, Placement::new(0, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(
        place_ship(&mut board, 0, Placement::new(0, 5, Orientation::Horizontal)),
        Err(GameError::ShipAlreadyPlaced(0))
    );
    assert_eq!(board.grid().occupied_count(), SHIPS[0].length());
}
