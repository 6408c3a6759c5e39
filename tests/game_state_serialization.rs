use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{BoardState, Direction, GameEngine};

fn played_engine(seed: u64, size: usize, moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new_game(size, seed).unwrap();
    for &m in moves {
        engine.make_move(Direction::ALL[m]);
    }
    engine
}

proptest! {
    #[test]
    fn text_snapshot_roundtrip(
        seed in any::<u64>(),
        size in 2usize..=6,
        moves in prop::collection::vec(0usize..4, 0..100),
    ) {
        let engine = played_engine(seed, size, &moves);
        let text = engine.save_game();
        let restored = GameEngine::load_game(&text, SmallRng::seed_from_u64(0)).unwrap();
        prop_assert_eq!(restored.grid(), engine.grid());
        prop_assert_eq!(restored.score(), engine.score());
        prop_assert_eq!(restored.save_game(), text);
    }

    #[test]
    fn game_state_bincode_roundtrip(seed in any::<u64>(), moves in prop::collection::vec(0usize..4, 0..100)) {
        let engine = played_engine(seed, 4, &moves);
        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: BoardState = bincode::deserialize(&bytes).unwrap();
        let restored = GameEngine::from_state(decoded, SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(engine.state(), restored.state());
    }
}
