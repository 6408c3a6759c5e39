use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use twenty48::{init_logging, GameEngine, GameStatus, GreedyPlayer, Session, DEFAULT_BOARD_SIZE};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let engine = GameEngine::with_source(size, SmallRng::seed_from_u64(seed))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut session = Session::new(Box::new(GreedyPlayer::new()), engine);
    let summary = session.run(None)?;

    let result = json!({
        "seed": seed,
        "size": size,
        "score": summary.score,
        "max_tile": summary.max_tile,
        "moves": summary.moves,
        "game_over": summary.status == GameStatus::Over,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
