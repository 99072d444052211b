use std::io::{self, BufRead};
use std::time::Duration;

use battleship_solo::{
    init_logging, ui, Intent, LogPresenter, Session, TurnController, OPPONENT_MOVE_DELAY,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Pause before the opponent fires, in milliseconds")]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, delay_ms } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let delay = delay_ms.map(Duration::from_millis).unwrap_or(OPPONENT_MOVE_DELAY);
            play(rng, delay).await?;
        }
    }
    Ok(())
}

async fn play(rng: SmallRng, delay: Duration) -> anyhow::Result<()> {
    let controller = TurnController::new(rng, LogPresenter).with_opponent_delay(delay);
    let (session, mut snapshots) = Session::new(controller);
    let (intents, intent_rx) = mpsc::channel(32);
    let session_task = tokio::spawn(session.run(intent_rx));

    // stdin is blocking; read it on its own thread.
    let (line_tx, mut lines) = mpsc::channel::<String>(8);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    println!("Commands: A1-J10 to place/fire, 'r' rotate, 'rematch', 'q' quit");
    // No opening animation in the terminal.
    intents.send(Intent::OpenGame).await?;
    intents.send(Intent::OpeningFinished).await?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                print!("{}", ui::render_snapshot(&snapshot));
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    intents.send(Intent::Quit).await?;
                    break;
                };
                let phase = snapshots.borrow().phase;
                match ui::parse_command(&line, phase) {
                    Ok(batch) => {
                        let quitting = batch.contains(&Intent::Quit);
                        for intent in batch {
                            intents.send(intent).await?;
                        }
                        if quitting {
                            break;
                        }
                    }
                    Err(msg) => println!("  {}", msg),
                }
            }
        }
    }

    let controller = session_task.await??;
    println!("Final turn count: {}", controller.game().turn());
    Ok(())
}
