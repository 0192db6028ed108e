#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use letterpress::{
    generate_grid, init_logging, print_board, run_game, AiPlayer, CliPlayer, GameEngine,
    GameError, Grid, Side, Strategy, WordList, BOARD_SIZE,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, default_value = "wordlist.txt", help = "Word list, one word per line")]
        words: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Use these 25 letters instead of a random board")]
        letters: Option<String>,
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        strategy: Strategy,
    },
    /// Let two computer players play each other and print the result as JSON.
    Sim {
        #[arg(long, default_value = "wordlist.txt", help = "Word list, one word per line")]
        words: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        player1: Strategy,
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        player2: Strategy,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_grid(seed: Option<u64>, letters: Option<&str>) -> anyhow::Result<Grid<BOARD_SIZE>> {
    let grid = match letters {
        Some(l) => Grid::from_str_letters(l),
        None => generate_grid(&mut make_rng(seed)),
    };
    grid.map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn load_words(path: &PathBuf) -> anyhow::Result<WordList> {
    let words = WordList::load(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    if words.is_empty() {
        anyhow::bail!("word list {} is empty", path.display());
    }
    Ok(words)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            words,
            seed,
            letters,
            strategy,
        } => {
            let words = load_words(&words)?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (board will be reproducible)", s);
            }
            let mut engine = GameEngine::new(make_grid(seed, letters.as_deref())?);
            log::info!("Board: {}", engine.grid());
            let mut human = CliPlayer::stdio();
            let mut computer = AiPlayer::new(strategy);

            match run_game(&mut engine, &mut human, &mut computer, &words) {
                Ok(winner) => {
                    print_board(engine.board());
                    match winner {
                        Side::Player1 => println!("\nYOU WON!"),
                        Side::Player2 => println!("\nSorry, you lost."),
                    }
                }
                Err(GameError::NoLegalMoveFound) => {
                    print_board(engine.board());
                    println!("\nThe computer cannot find a legal word. Game abandoned.");
                }
                Err(GameError::InputClosed) => println!("\nBye."),
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
            log::debug!("{}", serde_json::to_string(&engine.snapshot())?);
        }
        Commands::Sim {
            words,
            seed,
            player1,
            player2,
        } => {
            let words = load_words(&words)?;
            let mut engine = GameEngine::new(make_grid(seed, None)?);
            let mut ai1 = AiPlayer::new(player1);
            let mut ai2 = AiPlayer::new(player2);

            let outcome = run_game(&mut engine, &mut ai1, &mut ai2, &words);
            let winner = match outcome {
                Ok(side) => Some(side),
                Err(GameError::NoLegalMoveFound) => None,
                Err(e) => return Err(anyhow::anyhow!(e)),
            };
            let report = serde_json::json!({
                "winner": winner.map(|s| s.to_string()),
                "stalemate": winner.is_none(),
                "moves": engine.played_words().len(),
                "final": engine.snapshot(),
            });
            println!("{}", report);
        }
    }
    Ok(())
}
