use battleship_solo::{
    combat, Board, Game, GameError, Orientation, Phase, Placement, ShotResult, Side, NUM_SHIPS,
    PATROL_BOAT, SHIPS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Fleet laid out on rows 0..5, ship `i` anchored at (0, i) horizontally.
fn stacked_fleet(game: &mut Game, side: Side) {
    for ship in 0..NUM_SHIPS {
        game.place_ship(side, ship, Placement::new(0, ship, Orientation::Horizontal))
            .unwrap();
    }
}

#[test]
fn test_fire_on_open_water_is_a_miss() {
    let mut game = Game::new();
    stacked_fleet(&mut game, Side::Opponent);
    assert_eq!(game.fire(Side::Opponent, 9, 9), Ok(ShotResult::Miss));
    assert_eq!(game.was_hit(Side::Opponent, 9, 9), Ok(true));
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_repeat_shot_is_rejected_without_side_effects() {
    let mut game = Game::new();
    stacked_fleet(&mut game, Side::Opponent);
    assert_eq!(game.fire(Side::Opponent, 0, 0), Ok(ShotResult::Hit(0)));
    let before = game.clone();

    assert_eq!(
        game.fire(Side::Opponent, 0, 0),
        Err(GameError::RepeatShot { x: 0, y: 0 })
    );
    assert!(!game.fire_accepted(Side::Opponent, 9, 9));
    assert_eq!(game, before);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_off_board_shot_is_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.fire(Side::Player, 10, 2),
        Err(GameError::OutOfBounds { x: 10, y: 2 })
    );
    assert_eq!(game.turn(), 0);
}

#[test]
fn test_hits_drain_hit_points_until_destroyed() {
    let mut board = Board::new();
    battleship_solo::place_ship(&mut board, 2, Placement::new(4, 4, Orientation::Vertical))
        .unwrap();

    assert_eq!(combat::fire(&mut board, 4, 4), Ok(ShotResult::Hit(2)));
    assert_eq!(board.fleet().ship(2).unwrap().hit_points(), 2);
    assert_eq!(combat::fire(&mut board, 4, 5), Ok(ShotResult::Hit(2)));
    assert_eq!(combat::fire(&mut board, 4, 6), Ok(ShotResult::Destroyed(2)));

    let ship = board.fleet().ship(2).unwrap();
    assert_eq!(ship.hit_points(), 0);
    assert!(ship.is_destroyed());
    assert_eq!(board.fleet().ships_remaining(), NUM_SHIPS - 1);

    // destroyed ship's cells stay hit
    for y in 4..7 {
        assert_eq!(
            combat::fire(&mut board, 4, y),
            Err(GameError::RepeatShot { x: 4, y })
        );
    }
    assert_eq!(board.fleet().ships_remaining(), NUM_SHIPS - 1);
}

#[test]
fn test_last_patrol_boat_hit_decides_winner() {
    let mut game = Game::new();
    stacked_fleet(&mut game, Side::Opponent);

    for ship in 0..PATROL_BOAT {
        for x in 0..SHIPS[ship].length() {
            game.fire(Side::Opponent, x, ship).unwrap();
        }
    }
    assert_eq!(game.board(Side::Opponent).fleet().ships_remaining(), 1);

    assert_eq!(game.fire(Side::Opponent, 0, PATROL_BOAT), Ok(ShotResult::Hit(PATROL_BOAT)));
    assert_eq!(game.winner(), None);
    assert!(!matches!(game.phase(), Phase::Terminal(_)));

    assert_eq!(
        game.fire(Side::Opponent, 1, PATROL_BOAT),
        Ok(ShotResult::Destroyed(PATROL_BOAT))
    );
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.phase(), Phase::Terminal(Side::Player));
    assert!(game.board(Side::Opponent).fleet().all_destroyed());
}

#[test]
fn test_no_shots_after_a_winner() {
    let mut game = Game::new();
    stacked_fleet(&mut game, Side::Player);
    stacked_fleet(&mut game, Side::Opponent);
    for ship in 0..NUM_SHIPS {
        for x in 0..SHIPS[ship].length() {
            game.fire(Side::Opponent, x, ship).unwrap();
        }
    }
    assert_eq!(game.winner(), Some(Side::Player));
    let decided = game.clone();

    // sinking the player's fleet afterwards must not flip the result
    for ship in 0..NUM_SHIPS {
        for x in 0..SHIPS[ship].length() {
            assert_eq!(game.fire(Side::Player, x, ship), Err(GameError::InvalidPhaseAction));
        }
    }
    assert!(!game.fire_accepted(Side::Opponent, 0, 0));
    assert_eq!(game, decided);
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.phase(), Phase::Terminal(Side::Player));
}

#[test]
fn test_opponent_move_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = Game::new();
    for _ in 0..100 {
        combat::opponent_move(&mut game, &mut rng).unwrap();
    }
    assert_eq!(game.board(Side::Player).grid().hit_count(), 100);
    assert_eq!(game.turn(), 100);
    assert_eq!(
        combat::opponent_move(&mut game, &mut rng),
        Err(GameError::BoardExhausted)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fresh_cell_accepted_then_rejected(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        battleship_solo::place_fleet_randomly(&mut board, &mut rng).unwrap();

        prop_assert!(combat::fire(&mut board, x, y).is_ok());
        let after_first = board.clone();
        prop_assert_eq!(combat::fire(&mut board, x, y), Err(GameError::RepeatShot { x, y }));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn hit_points_track_hit_cells(seed in any::<u64>(), shots in 0..100usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new();
        game.place_fleet_randomly(Side::Player, &mut rng).unwrap();
        for _ in 0..shots {
            if game.winner().is_some() {
                break;
            }
            combat::opponent_move(&mut game, &mut rng).unwrap();
        }
        let board = game.board(Side::Player);
        for (id, ship) in board.fleet().ships().iter().enumerate() {
            let hit_cells = board
                .grid()
                .iter()
                .filter(|(_, c)| c.ship() == Some(id) && c.was_hit())
                .count();
            prop_assert_eq!(ship.hit_points(), ship.length() - hit_cells);
        }
        let destroyed = board.fleet().ships().iter().filter(|s| s.is_destroyed()).count();
        prop_assert_eq!(board.fleet().ships_remaining(), NUM_SHIPS - destroyed);
    }
}
