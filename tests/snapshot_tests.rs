use battleship_solo::{
    Game, GameSnapshot, Intent, Orientation, Phase, Placement, Side, TurnController, NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_snapshot_mirrors_game_state() {
    let mut game = Game::new();
    game.place_ship(Side::Player, 3, Placement::new(2, 2, Orientation::Vertical))
        .unwrap();
    game.fire(Side::Player, 2, 3).unwrap();

    let snapshot = GameSnapshot::from(&game);
    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.phase, Phase::Closed);
    assert_eq!(snapshot.player.cells.len(), 100);
    assert_eq!(snapshot.player.ships.len(), NUM_SHIPS);

    let cell = snapshot.player.cell(2, 3).unwrap();
    assert!(cell.occupied && cell.hit);
    assert_eq!(cell.ship, Some(3));
    assert!(snapshot.player.cell(10, 0).is_none());
    assert_eq!(snapshot.player.ships[3].hit_points, 2);
    assert!(snapshot.player.ships[3].placed);
    assert!(!snapshot.player.ships[0].placed);
}

#[test]
fn test_concealed_view_hides_afloat_ships() {
    let mut c = TurnController::new(SmallRng::seed_from_u64(21), ());
    c.handle(Intent::OpenGame).unwrap();
    let full = c.snapshot();
    assert_eq!(full.opponent.cells.iter().filter(|c| c.occupied).count(), 17);

    let hidden = full.concealed();
    assert!(hidden.opponent.cells.iter().all(|c| !c.occupied && c.ship.is_none()));
    assert!(hidden.opponent.ships.iter().all(|s| s.placement.is_none()));
    assert_eq!(hidden.player, full.player);
    assert_eq!(hidden.opponent.ships_remaining, NUM_SHIPS);
}

#[test]
fn test_concealed_view_reveals_destroyed_ship() {
    let mut game = Game::new();
    let placement = Placement::new(5, 5, Orientation::Horizontal);
    game.place_ship(Side::Opponent, 4, placement).unwrap();
    game.place_ship(Side::Opponent, 0, Placement::new(0, 0, Orientation::Horizontal))
        .unwrap();
    game.fire(Side::Opponent, 5, 5).unwrap();
    game.fire(Side::Opponent, 6, 5).unwrap();
    game.fire(Side::Opponent, 0, 0).unwrap();

    let hidden = GameSnapshot::from(&game).concealed().opponent;
    assert_eq!(hidden.cell(5, 5).unwrap().ship, Some(4));
    assert_eq!(hidden.ships[4].placement, Some(placement));

    // hit but still afloat: occupancy shows, identity does not
    let carrier_hit = hidden.cell(0, 0).unwrap();
    assert!(carrier_hit.occupied);
    assert_eq!(carrier_hit.ship, None);
    assert_eq!(hidden.ships[0].placement, None);
    assert!(!hidden.cell(1, 0).unwrap().occupied);
}

#[test]
fn test_snapshot_carries_placement_orientation() {
    let mut c = TurnController::new(SmallRng::seed_from_u64(22), ());
    c.handle(Intent::OpenGame).unwrap();
    c.handle(Intent::OpeningFinished).unwrap();
    assert_eq!(c.snapshot().orientation, Orientation::Horizontal);
    c.handle(Intent::RotatePlacement).unwrap();
    assert_eq!(c.snapshot().orientation, Orientation::Vertical);
    assert_eq!(c.snapshot().phase, Phase::PlacingShip(0));
}
