//! Headless game: the player side fires at random unhit cells and the
//! opponent's reply runs without waiting. Prints a JSON summary.

use battleship_solo::{GameError, Intent, Phase, Side, TurnController, BOARD_SIZE, NUM_SHIPS};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut controller = TurnController::new(SmallRng::seed_from_u64(seed), ());

    controller.handle(Intent::OpenGame)?;
    controller.handle(Intent::OpeningFinished)?;
    for _ in 0..NUM_SHIPS {
        place_with_retries(&mut controller, &mut shooter)?;
    }

    while controller.game().phase() == Phase::Combat {
        let (x, y) = loop {
            let x = shooter.random_range(0..BOARD_SIZE);
            let y = shooter.random_range(0..BOARD_SIZE);
            if !controller.game().was_hit(Side::Opponent, x, y)? {
                break (x, y);
            }
        };
        controller.attempt_fire(x, y)?;
        if let Some(pending) = controller.pending_opponent_move() {
            controller.run_opponent_move(pending.ticket)?;
        }
    }

    let game = controller.game();
    let winner = match game.winner() {
        Some(Side::Player) => Some("player"),
        Some(Side::Opponent) => Some("opponent"),
        None => None,
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": game.turn(),
        "player_ships_remaining": game.board(Side::Player).fleet().ships_remaining(),
        "opponent_ships_remaining": game.board(Side::Opponent).fleet().ships_remaining(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Keep proposing random anchors for the current ship until one is accepted.
fn place_with_retries<R: Rng>(
    controller: &mut TurnController<SmallRng, ()>,
    rng: &mut R,
) -> anyhow::Result<()> {
    let phase = controller.game().phase();
    loop {
        if rng.random::<bool>() {
            controller.rotate_placement()?;
        }
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        match controller.attempt_place_ship(x, y) {
            Ok(()) => return Ok(()),
            Err(GameError::IllegalPlacement) if controller.game().phase() == phase => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
