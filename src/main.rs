#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{init_logging, ui::print_board, Direction, GameEngine};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run a random-policy game to completion and report the result.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn parse_direction(input: &str) -> Option<Direction> {
    match input {
        "w" | "up" => Some(Direction::Up),
        "s" | "down" => Some(Direction::Down),
        "a" | "left" => Some(Direction::Left),
        "d" | "right" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new(&mut rng);
            loop {
                print_board(&engine.state());
                if engine.is_terminal() {
                    println!("Game over! Final score: {}", engine.score());
                    break;
                }
                print!("Move [w/a/s/d, q to quit]: ");
                io::stdout().flush()?;
                let mut input = String::new();
                if io::stdin().read_line(&mut input)? == 0 {
                    break;
                }
                let input = input.trim().to_ascii_lowercase();
                if input == "q" || input == "quit" {
                    break;
                }
                match parse_direction(&input) {
                    Some(dir) => {
                        let outcome = engine.apply_move(dir, &mut rng);
                        log::debug!(
                            "move {:?} moved={} score={}",
                            dir,
                            outcome.moved,
                            engine.score()
                        );
                        if !outcome.moved {
                            println!("Nothing slid that way.");
                        }
                    }
                    None => println!("Unrecognized input '{}'.", input),
                }
            }
        }
        Commands::Sim { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new(&mut rng);
            let mut moves = 0usize;
            while !engine.is_terminal() {
                let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                if engine.apply_move(dir, &mut rng).moved {
                    moves += 1;
                }
            }
            print_board(&engine.state());
            println!(
                "Game over after {} moves: score {}, highest tile {}",
                moves,
                engine.score(),
                engine.board().max_tile()
            );
        }
    }

    Ok(())
}
