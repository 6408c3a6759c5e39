#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{
    init_logging, storage, BoardState, CliPlayer, GameEngine, GameStatus, GreedyPlayer,
    Player, Session, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Resume from a saved snapshot instead of a fresh board")]
    load: Option<PathBuf>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively from the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Let the greedy player play and print the final board.
    Auto {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long)]
        max_moves: Option<usize>,
        #[arg(long, help = "Write the final board to this file")]
        save: Option<PathBuf>,
    },
    /// Check whether a file holds a valid snapshot.
    Check { file: PathBuf },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn open_game(args: &GameArgs) -> anyhow::Result<GameEngine> {
    let rng = make_rng(args.seed);
    match &args.load {
        Some(path) => storage::load_from_path(path, rng)
            .map_err(|e| anyhow::anyhow!("loading {}: {}", path.display(), e)),
        None => GameEngine::with_source(args.size, rng).map_err(|e| anyhow::anyhow!(e)),
    }
}

#[cfg(feature = "std")]
fn print_result(engine: &GameEngine) {
    println!("\n{}", engine.board());
    match engine.status() {
        GameStatus::Over => println!("GAME OVER - final score {}", engine.score()),
        GameStatus::InProgress => println!("Stopped with score {}", engine.score()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let engine = open_game(&game)?;
            let player: Box<dyn Player> = Box::new(CliPlayer::new());
            let mut session = Session::new(player, engine);
            let summary = session.run(None)?;
            log::info!("session finished: {:?}", summary);
            print_result(session.engine());
        }
        Commands::Auto {
            game,
            max_moves,
            save,
        } => {
            let engine = open_game(&game)?;
            let mut session = Session::new(Box::new(GreedyPlayer::new()), engine);
            let summary = session.run(max_moves)?;
            println!("Played {} moves", summary.moves);
            print_result(session.engine());
            if let Some(path) = save {
                storage::save_to_path(&path, session.engine())
                    .map_err(|e| anyhow::anyhow!("saving {}: {}", path.display(), e))?;
            }
        }
        Commands::Check { file } => {
            let text = std::fs::read_to_string(&file)?;
            match text.parse::<BoardState>() {
                Ok(state) => println!(
                    "{}: valid {}x{} snapshot, score {}",
                    file.display(),
                    state.size,
                    state.size,
                    state.score
                ),
                Err(e) => {
                    println!("{}: not a valid snapshot ({})", file.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
